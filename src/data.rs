use gloo_net::http::Request;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Award {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nominees: Vec<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub trophy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{0} was not found")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid document: {0}")]
    Parse(String),
}

impl DataError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

pub async fn fetch_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, DataError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(DataError::network)?;

    if response.status() == 404 {
        return Err(DataError::NotFound(path.to_owned()));
    }

    if !response.ok() {
        return Err(DataError::Network(format!(
            "HTTP {} while fetching {}",
            response.status(),
            path
        )));
    }

    let text = response.text().await.map_err(DataError::network)?;
    parse_collection(&text)
}

/// Fetches a collection, falling back to an empty one when the document is
/// unreachable or malformed.
pub async fn load_collection<T: DeserializeOwned>(path: &str) -> Vec<T> {
    match fetch_collection(path).await {
        Ok(items) => items,
        Err(err) => {
            warn!("Falling back to an empty collection for {}: {}", path, err);
            Vec::new()
        }
    }
}

fn parse_collection<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, DataError> {
    serde_json::from_str(text).map_err(DataError::parse)
}

/// Read-only lookups across whichever collections have arrived so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog<'a> {
    pub games: &'a [Game],
    pub awards: &'a [Award],
    pub tags: &'a [Tag],
}

impl<'a> Catalog<'a> {
    pub fn game(&self, id: &str) -> Option<&'a Game> {
        self.games.iter().find(|game| game.id == id)
    }

    pub fn award(&self, id: &str) -> Option<&'a Award> {
        self.awards.iter().find(|award| award.id == id)
    }

    /// Tag label, or the raw id until the tag list has loaded.
    pub fn tag_label(&self, id: &'a str) -> &'a str {
        self.tags
            .iter()
            .find(|tag| tag.id == id)
            .map(|tag| tag.name.as_str())
            .unwrap_or(id)
    }

    pub fn game_name(&self, id: &'a str) -> &'a str {
        self.game(id).map(|game| game.name.as_str()).unwrap_or(id)
    }

    pub fn tag_labels(&self, game: &'a Game) -> Vec<&'a str> {
        game.tags.iter().map(|id| self.tag_label(id)).collect()
    }

    pub fn awards_nominating(&self, game_id: &str) -> Vec<&'a Award> {
        self.awards
            .iter()
            .filter(|award| award.nominees.iter().any(|id| id == game_id))
            .collect()
    }

    /// Nominee records for an award; ids without a game record are skipped.
    pub fn nominee_games(&self, award: &'a Award) -> Vec<&'a Game> {
        award
            .nominees
            .iter()
            .filter_map(|id| self.game(id))
            .collect()
    }
}
