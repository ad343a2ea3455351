//! Query-string form of a listing screen's state.
//!
//! Only non-default fields are written, in the fixed order `q`, `tags`,
//! `sort`, `view`, so that equal states always serialize to the same string
//! and the reconciler can compare strings instead of states.

use crate::config::{AWARDS_VIEW_KEY, GAMES_VIEW_KEY};
use crate::filter::{FilterState, SortMode};
use url::form_urlencoded;

pub const QUERY_PARAM: &str = "q";
pub const TAGS_PARAM: &str = "tags";
pub const SORT_PARAM: &str = "sort";
pub const VIEW_PARAM: &str = "view";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "list" => Some(ViewMode::List),
            "grid" => Some(ViewMode::Grid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Games,
    Awards,
}

impl ScreenKind {
    pub fn has_tags(self) -> bool {
        matches!(self, ScreenKind::Games)
    }

    pub fn view_storage_key(self) -> &'static str {
        match self {
            ScreenKind::Games => GAMES_VIEW_KEY,
            ScreenKind::Awards => AWARDS_VIEW_KEY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingState {
    pub filter: FilterState,
    pub view: ViewMode,
}

/// Serialization context of one screen instance. `fallback_view` is the
/// view an absent `view` parameter stands for: the screen's current view
/// preference, or `list` when none was ever chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCodec {
    pub screen: ScreenKind,
    pub fallback_view: ViewMode,
}

impl QueryCodec {
    pub fn new(screen: ScreenKind, fallback_view: ViewMode) -> Self {
        Self {
            screen,
            fallback_view,
        }
    }

    pub fn pairs(&self, state: &ListingState) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let filter = &state.filter;

        if !filter.query.is_empty() {
            pairs.push((QUERY_PARAM, filter.query.clone()));
        }

        if self.screen.has_tags() && !filter.tags.is_empty() {
            let joined = filter
                .tags
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push((TAGS_PARAM, joined));
        }

        if filter.sort != SortMode::default() {
            pairs.push((SORT_PARAM, filter.sort.as_str().to_string()));
        }

        if state.view != self.fallback_view {
            pairs.push((VIEW_PARAM, state.view.as_str().to_string()));
        }

        pairs
    }

    pub fn serialize(&self, state: &ListingState) -> String {
        encode_pairs(&self.pairs(state))
    }

    /// Parses a query string (with or without the leading `?`). Never fails:
    /// unknown parameters are ignored and bad values fall back to defaults.
    pub fn parse(&self, query: &str) -> ListingState {
        let mut state = ListingState {
            filter: FilterState::default(),
            view: self.fallback_view,
        };

        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                QUERY_PARAM => state.filter.query = value.into_owned(),
                TAGS_PARAM if self.screen.has_tags() => {
                    state.filter.tags = split_tags(&value);
                }
                SORT_PARAM => state.filter.sort = SortMode::parse(&value),
                VIEW_PARAM => {
                    state.view = ViewMode::parse(&value).unwrap_or(self.fallback_view);
                }
                _ => {}
            }
        }

        state
    }
}

pub fn encode_pairs(pairs: &[(&str, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(key, value)| (*key, value.as_str())))
        .finish()
}

fn split_tags(raw: &str) -> std::collections::BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
