use crate::query::{ScreenKind, ViewMode};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Persisted per-screen view preference. Implementations swallow failures:
/// a store that cannot be read or written behaves like an empty one.
pub trait PreferenceStore {
    fn load_view(&self, screen: ScreenKind) -> Option<ViewMode>;

    fn save_view(&self, screen: ScreenKind, view: ViewMode);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load_view(&self, screen: ScreenKind) -> Option<ViewMode> {
        let key = screen.view_storage_key();
        match LocalStorage::get::<String>(key) {
            Ok(raw) => ViewMode::parse(&raw),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                warn!("Ignoring stored view for {}: {}", key, err);
                None
            }
        }
    }

    fn save_view(&self, screen: ScreenKind, view: ViewMode) {
        let key = screen.view_storage_key();
        if let Err(err) = LocalStorage::set(key, view.as_str()) {
            warn!("Failed to persist view for {}: {}", key, err);
        }
    }
}

/// Store backed by a shared map, for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Rc<RefCell<HashMap<&'static str, ViewMode>>>,
}

impl MemoryPreferenceStore {
    pub fn with_view(screen: ScreenKind, view: ViewMode) -> Self {
        let store = Self::default();
        store.save_view(screen, view);
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_view(&self, screen: ScreenKind) -> Option<ViewMode> {
        self.values
            .borrow()
            .get(screen.view_storage_key())
            .copied()
    }

    fn save_view(&self, screen: ScreenKind, view: ViewMode) {
        self.values
            .borrow_mut()
            .insert(screen.view_storage_key(), view);
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn load_view(&self, screen: ScreenKind) -> Option<ViewMode> {
        (**self).load_view(screen)
    }

    fn save_view(&self, screen: ScreenKind, view: ViewMode) {
        (**self).save_view(screen, view)
    }
}
