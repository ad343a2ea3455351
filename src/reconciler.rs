//! Keeps a listing screen's filter/sort/view state in step with the URL
//! query string and the persisted view preference.
//!
//! The reconciler is a small state machine fed through a queue. Two kinds of
//! input exist: URL changes (typing in the address bar, back/forward, our
//! own writes echoing back) and user actions. Every transition is gated on
//! "does the proposed state differ from the current one", and every URL
//! write on "does the serialized state differ from the current query
//! string". Together these make an echoed write a no-op, so URL and state
//! cannot ping-pong.

use crate::filter::{FilterState, SortMode};
use crate::query::{ListingState, QueryCodec, ScreenKind, ViewMode};
use crate::storage::PreferenceStore;
use log::debug;
use std::collections::{BTreeSet, VecDeque};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SetQuery(String),
    ToggleTag(String),
    SetTags(BTreeSet<String>),
    SetSort(SortMode),
    SetView(ViewMode),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    UrlChanged(String),
    User(UserAction),
}

/// Where the reconciler reads and writes the query string.
pub trait LocationPort {
    /// Current query string, with or without the leading `?`.
    fn current_query(&self) -> String;

    /// Replaces the query string without adding a history entry.
    fn replace_query(&mut self, pairs: &[(&'static str, String)]);
}

/// Result of draining the input queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drained {
    /// The in-memory state changed and the screen should re-render.
    pub changed: bool,
    /// Query parameters to write back, when they differ from the URL.
    pub url_write: Option<Vec<(&'static str, String)>>,
}

pub struct Reconciler<S: PreferenceStore> {
    codec: QueryCodec,
    state: ListingState,
    pending: VecDeque<Input>,
    store: S,
}

impl<S: PreferenceStore> Reconciler<S> {
    /// Resolves the initial state of a freshly mounted screen. The stored
    /// preference is read here and never again for this instance; an
    /// explicit `view` in the URL wins over it. Later toggles update the
    /// fallback in memory, so an absent `view` always means the current
    /// preference.
    pub fn mount(screen: ScreenKind, url_query: &str, store: S) -> Self {
        let fallback_view = store.load_view(screen).unwrap_or_default();
        let codec = QueryCodec::new(screen, fallback_view);
        let state = codec.parse(url_query);
        debug!("Mounted {:?} listing with {:?}", screen, state);

        Self {
            codec,
            state,
            pending: VecDeque::new(),
            store,
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn enqueue(&mut self, input: Input) {
        self.pending.push_back(input);
    }

    pub fn dispatch(&mut self, action: UserAction) {
        self.enqueue(Input::User(action));
    }

    /// Processes every queued input in order. User changes made during the
    /// drain coalesce into at most one URL write; a URL change queued after
    /// them takes precedence and cancels the write.
    pub fn drain(&mut self, current_query: &str) -> Drained {
        let mut url = strip_question_mark(current_query).to_string();
        let mut changed = false;
        let mut outbound_due = false;

        while let Some(input) = self.pending.pop_front() {
            match input {
                Input::UrlChanged(query) => {
                    url = strip_question_mark(&query).to_string();
                    let candidate = self.codec.parse(&url);
                    if candidate != self.state {
                        debug!("URL moved {:?} listing to {:?}", self.codec.screen, candidate);
                        self.state = candidate;
                        changed = true;
                    }
                    outbound_due = false;
                }
                Input::User(action) => {
                    if let Some(next) = self.apply(action) {
                        self.state = next;
                        changed = true;
                        outbound_due = true;
                    }
                }
            }
        }

        let url_write = if outbound_due && self.codec.serialize(&self.state) != url {
            Some(self.codec.pairs(&self.state))
        } else {
            None
        };

        Drained { changed, url_write }
    }

    /// Drains against a location and performs the resulting write. Returns
    /// whether the state changed.
    pub fn sync<L: LocationPort + ?Sized>(&mut self, location: &mut L) -> bool {
        let drained = self.drain(&location.current_query());
        if let Some(pairs) = drained.url_write {
            location.replace_query(&pairs);
        }
        drained.changed
    }

    fn apply(&mut self, action: UserAction) -> Option<ListingState> {
        let mut next = self.state.clone();

        match action {
            UserAction::SetQuery(query) => next.filter.query = query,
            UserAction::ToggleTag(tag) => {
                if !self.codec.screen.has_tags() {
                    return None;
                }
                if !next.filter.tags.remove(&tag) {
                    next.filter.tags.insert(tag);
                }
            }
            UserAction::SetTags(tags) => {
                if !self.codec.screen.has_tags() {
                    return None;
                }
                next.filter.tags = tags;
            }
            UserAction::SetSort(sort) => next.filter.sort = sort,
            UserAction::SetView(view) => {
                self.store.save_view(self.codec.screen, view);
                self.codec.fallback_view = view;
                next.view = view;
            }
            UserAction::Clear => next.filter = FilterState::default(),
        }

        (next != self.state).then_some(next)
    }
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_pairs;
    use crate::storage::MemoryPreferenceStore;

    #[derive(Debug, Default)]
    struct MemoryLocation {
        query: String,
        writes: usize,
    }

    impl MemoryLocation {
        fn at(query: &str) -> Self {
            Self {
                query: query.to_string(),
                writes: 0,
            }
        }
    }

    impl LocationPort for MemoryLocation {
        fn current_query(&self) -> String {
            self.query.clone()
        }

        fn replace_query(&mut self, pairs: &[(&'static str, String)]) {
            self.query = encode_pairs(pairs);
            self.writes += 1;
        }
    }

    fn games(query: &str, store: MemoryPreferenceStore) -> Reconciler<MemoryPreferenceStore> {
        Reconciler::mount(ScreenKind::Games, query, store)
    }

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn url_view_wins_over_stored_preference() {
        let store = MemoryPreferenceStore::with_view(ScreenKind::Games, ViewMode::List);
        assert_eq!(games("view=grid", store).state().view, ViewMode::Grid);
    }

    #[test]
    fn stored_preference_wins_over_default() {
        let store = MemoryPreferenceStore::with_view(ScreenKind::Games, ViewMode::Grid);
        assert_eq!(games("", store).state().view, ViewMode::Grid);
    }

    #[test]
    fn default_view_is_list() {
        let reconciler = games("", MemoryPreferenceStore::default());
        assert_eq!(reconciler.state().view, ViewMode::List);
    }

    #[test]
    fn mount_seeds_filter_from_url() {
        let reconciler = games("q=zel&tags=rpg&sort=alpha-desc", MemoryPreferenceStore::default());
        let filter = &reconciler.state().filter;
        assert_eq!(filter.query, "zel");
        assert_eq!(filter.tags, tags(&["rpg"]));
        assert_eq!(filter.sort, SortMode::AlphaDesc);
    }

    #[test]
    fn outbound_sync_is_idempotent() {
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::SetQuery("zelda".into()));
        assert!(reconciler.sync(&mut location));
        assert_eq!(location.query, "q=zelda");
        assert_eq!(location.writes, 1);

        assert!(!reconciler.sync(&mut location));
        reconciler.dispatch(UserAction::SetQuery("zelda".into()));
        assert!(!reconciler.sync(&mut location));
        assert_eq!(location.writes, 1);
    }

    #[test]
    fn echoed_urls_never_trigger_writes() {
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::ToggleTag("rpg".into()));
        reconciler.sync(&mut location);
        assert_eq!(location.writes, 1);

        for _ in 0..5 {
            reconciler.enqueue(Input::UrlChanged(format!("?{}", location.query)));
            assert!(!reconciler.sync(&mut location));
        }
        reconciler.enqueue(Input::UrlChanged("tags=rpg&sort=alpha-asc".into()));
        assert!(!reconciler.sync(&mut location));
        assert_eq!(location.writes, 1);
    }

    #[test]
    fn back_navigation_replaces_state_without_writing() {
        let mut location = MemoryLocation::at("q=mario");
        let mut reconciler = games("q=mario", MemoryPreferenceStore::default());

        location.query = "q=zelda&view=grid".into();
        reconciler.enqueue(Input::UrlChanged(location.query.clone()));
        assert!(reconciler.sync(&mut location));

        assert_eq!(reconciler.state().filter.query, "zelda");
        assert_eq!(reconciler.state().view, ViewMode::Grid);
        assert_eq!(location.writes, 0);
    }

    #[test]
    fn user_actions_in_one_drain_coalesce_into_one_write() {
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::SetQuery("z".into()));
        reconciler.dispatch(UserAction::SetQuery("ze".into()));
        reconciler.dispatch(UserAction::SetSort(SortMode::None));
        reconciler.sync(&mut location);

        assert_eq!(location.writes, 1);
        assert_eq!(location.query, "q=ze&sort=none");
    }

    #[test]
    fn later_url_change_cancels_pending_write() {
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::SetQuery("typed".into()));
        reconciler.enqueue(Input::UrlChanged("q=navigated".into()));
        reconciler.sync(&mut location);

        assert_eq!(reconciler.state().filter.query, "navigated");
        assert_eq!(location.writes, 0);
    }

    #[test]
    fn clear_resets_filter_but_keeps_view() {
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::SetQuery("x".into()));
        reconciler.dispatch(UserAction::SetTags(tags(&["a"])));
        reconciler.dispatch(UserAction::SetSort(SortMode::AlphaDesc));
        reconciler.dispatch(UserAction::SetView(ViewMode::Grid));
        reconciler.sync(&mut location);
        assert_eq!(location.query, "q=x&tags=a&sort=alpha-desc");

        reconciler.dispatch(UserAction::Clear);
        reconciler.sync(&mut location);

        assert_eq!(reconciler.state().filter, FilterState::default());
        assert_eq!(reconciler.state().view, ViewMode::Grid);
        assert_eq!(location.query, "");
    }

    #[test]
    fn clear_keeps_an_explicit_url_view() {
        let mut location = MemoryLocation::at("q=x&view=grid");
        let mut reconciler = games(&location.query.clone(), MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::Clear);
        reconciler.sync(&mut location);

        assert_eq!(reconciler.state().view, ViewMode::Grid);
        assert_eq!(location.query, "view=grid");
    }

    #[test]
    fn bare_url_after_a_toggle_means_the_new_preference() {
        let store = MemoryPreferenceStore::with_view(ScreenKind::Games, ViewMode::Grid);
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", store.clone());
        assert_eq!(reconciler.state().view, ViewMode::Grid);

        reconciler.dispatch(UserAction::SetView(ViewMode::List));
        reconciler.sync(&mut location);
        assert_eq!(store.load_view(ScreenKind::Games), Some(ViewMode::List));

        location.query = "q=mario".into();
        reconciler.enqueue(Input::UrlChanged(location.query.clone()));
        reconciler.sync(&mut location);
        location.query.clear();
        reconciler.enqueue(Input::UrlChanged(String::new()));
        reconciler.sync(&mut location);

        let fresh = games("", store.clone());
        assert_eq!(reconciler.state().view, ViewMode::List);
        assert_eq!(fresh.state().view, ViewMode::List);
        assert_eq!(location.writes, 0);
    }

    #[test]
    fn toggle_away_from_an_explicit_url_view_drops_the_parameter() {
        let store = MemoryPreferenceStore::with_view(ScreenKind::Games, ViewMode::List);
        let mut location = MemoryLocation::at("view=grid");
        let mut reconciler = games("view=grid", store.clone());

        reconciler.dispatch(UserAction::SetView(ViewMode::List));
        reconciler.sync(&mut location);

        assert_eq!(location.query, "");
        assert_eq!(location.writes, 1);
        assert_eq!(games(&location.query.clone(), store).state().view, ViewMode::List);
    }

    #[test]
    fn clear_with_default_view_empties_the_query() {
        let mut location = MemoryLocation::at("q=x&tags=a&sort=alpha-desc");
        let mut reconciler = games(&location.query.clone(), MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::Clear);
        reconciler.sync(&mut location);

        assert_eq!(location.query, "");
        assert_eq!(location.writes, 1);
    }

    #[test]
    fn only_user_toggles_persist_the_view() {
        let store = MemoryPreferenceStore::default();
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", store.clone());

        reconciler.enqueue(Input::UrlChanged("view=grid".into()));
        reconciler.sync(&mut location);
        assert_eq!(store.load_view(ScreenKind::Games), None);

        reconciler.dispatch(UserAction::SetView(ViewMode::List));
        reconciler.sync(&mut location);
        assert_eq!(store.load_view(ScreenKind::Games), Some(ViewMode::List));
        assert_eq!(store.load_view(ScreenKind::Awards), None);
    }

    #[test]
    fn awards_ignore_tag_actions() {
        let mut location = MemoryLocation::default();
        let mut reconciler =
            Reconciler::mount(ScreenKind::Awards, "", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::ToggleTag("rpg".into()));
        assert!(!reconciler.sync(&mut location));
        assert!(reconciler.state().filter.tags.is_empty());
        assert_eq!(location.writes, 0);
    }

    #[test]
    fn toggling_a_tag_twice_removes_it() {
        let mut location = MemoryLocation::default();
        let mut reconciler = games("", MemoryPreferenceStore::default());

        reconciler.dispatch(UserAction::ToggleTag("rpg".into()));
        reconciler.dispatch(UserAction::ToggleTag("rpg".into()));
        reconciler.sync(&mut location);

        assert!(reconciler.state().filter.tags.is_empty());
        assert_eq!(location.writes, 0);
    }
}
