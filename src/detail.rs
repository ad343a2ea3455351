//! View models for the game and award detail screens.

use crate::assets::resolve_image_src;
use crate::data::{Award, Catalog, Game};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardBadge {
    pub id: String,
    pub name: String,
    pub cover: Option<String>,
    pub icon: Option<String>,
    pub trophy: Option<String>,
}

impl From<&Award> for AwardBadge {
    fn from(award: &Award) -> Self {
        Self {
            id: award.id.clone(),
            name: award.name.clone(),
            cover: award.cover.clone(),
            icon: award.icon.clone(),
            trophy: award.trophy.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetail {
    pub id: String,
    pub name: String,
    pub cover_src: Option<String>,
    pub icon_src: Option<String>,
    pub synopsis: Option<String>,
    pub tag_labels: Vec<String>,
    pub gallery: Vec<String>,
    pub nominated_in: Vec<AwardBadge>,
}

impl GameDetail {
    pub fn build(catalog: &Catalog<'_>, id: &str) -> Option<Self> {
        let game: &Game = catalog.game(id)?;

        Some(Self {
            id: game.id.clone(),
            name: game.name.clone(),
            cover_src: resolve_image_src(game.cover.as_deref().or(game.icon.as_deref())),
            icon_src: resolve_image_src(game.icon.as_deref()),
            synopsis: game.synopsis.clone().filter(|text| !text.trim().is_empty()),
            tag_labels: catalog
                .tag_labels(game)
                .into_iter()
                .map(str::to_string)
                .collect(),
            gallery: game
                .images
                .iter()
                .filter_map(|image| resolve_image_src(Some(image)))
                .collect(),
            nominated_in: catalog
                .awards_nominating(&game.id)
                .into_iter()
                .map(AwardBadge::from)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NomineeTile {
    pub id: String,
    pub name: String,
    pub cover: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardDetail {
    pub id: String,
    pub name: String,
    pub cover_src: Option<String>,
    pub icon_src: Option<String>,
    pub trophy_src: Option<String>,
    pub description: Option<String>,
    pub nominees: Vec<NomineeTile>,
}

impl AwardDetail {
    pub fn build(catalog: &Catalog<'_>, id: &str) -> Option<Self> {
        let award = catalog.award(id)?;

        Some(Self {
            id: award.id.clone(),
            name: award.name.clone(),
            cover_src: resolve_image_src(award.cover.as_deref().or(award.icon.as_deref())),
            icon_src: resolve_image_src(award.icon.as_deref()),
            trophy_src: resolve_image_src(award.trophy.as_deref()),
            description: award.description.clone().filter(|text| !text.trim().is_empty()),
            nominees: catalog
                .nominee_games(award)
                .into_iter()
                .map(|game| NomineeTile {
                    id: game.id.clone(),
                    name: game.name.clone(),
                    cover: game.cover.clone(),
                })
                .collect(),
        })
    }
}
