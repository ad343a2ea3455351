use crate::data::{Award, Game};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    None,
    #[default]
    AlphaAsc,
    AlphaDesc,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::AlphaAsc => "alpha-asc",
            SortMode::AlphaDesc => "alpha-desc",
        }
    }

    /// Unknown or malformed values normalize to the default order.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "none" => SortMode::None,
            "alpha-desc" => SortMode::AlphaDesc,
            _ => SortMode::AlphaAsc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub tags: BTreeSet<String>,
    pub sort: SortMode,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_criteria(&self) -> bool {
        !self.query.trim().is_empty() || !self.tags.is_empty()
    }
}

/// Fields of an entity the listing filters and sorts on.
pub trait Searchable {
    fn name(&self) -> &str;

    fn secondary_text(&self) -> Option<&str>;

    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Searchable for Game {
    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> Option<&str> {
        self.synopsis.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Award {
    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

pub fn matches<T: Searchable + ?Sized>(entity: &T, filter: &FilterState) -> bool {
    matches_text(entity, &filter.query) && matches_tags(entity, &filter.tags)
}

fn matches_text<T: Searchable + ?Sized>(entity: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    entity.name().to_lowercase().contains(&needle)
        || entity
            .secondary_text()
            .map(|text| text.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

fn matches_tags<T: Searchable + ?Sized>(entity: &T, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || entity.tags().iter().any(|tag| selected.contains(tag))
}

pub fn filter_entities<'a, T: Searchable>(items: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    items.iter().filter(|item| matches(*item, filter)).collect()
}
