use crate::data::load_collection;
use log::debug;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSlot<T> {
    Loading,
    Ready(Vec<T>),
}

impl<T> Default for LoadSlot<T> {
    fn default() -> Self {
        LoadSlot::Loading
    }
}

impl<T> LoadSlot<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadSlot::Loading)
    }

    /// Item count once loaded. Each slot goes from `Loading` to `Ready`
    /// once per mount, so this identifies its contents cheaply.
    pub fn loaded_len(&self) -> Option<usize> {
        match self {
            LoadSlot::Loading => None,
            LoadSlot::Ready(items) => Some(items.len()),
        }
    }

    /// Items loaded so far; empty while loading.
    pub fn items(&self) -> &[T] {
        match self {
            LoadSlot::Loading => &[],
            LoadSlot::Ready(items) => items,
        }
    }
}

/// Liveness token for one mounted screen. Responses that arrive after the
/// scope is closed are dropped instead of being applied.
#[derive(Debug, Clone)]
pub struct FetchScope {
    live: Rc<Cell<bool>>,
}

impl Default for FetchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchScope {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn close(&self) {
        self.live.set(false);
    }

    /// Hands `value` to `apply` if the scope is still live. Returns whether
    /// it was applied.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_live() {
            return false;
        }
        apply(value);
        true
    }
}

/// Loads a collection in the background and applies it through `on_ready`
/// unless `scope` has been closed by then.
pub fn spawn_collection<T, F>(scope: &FetchScope, path: &'static str, on_ready: F)
where
    T: DeserializeOwned + 'static,
    F: FnOnce(Vec<T>) + 'static,
{
    let scope = scope.clone();
    spawn_local(async move {
        let items = load_collection::<T>(path).await;
        if !scope.deliver(items, on_ready) {
            debug!("Discarding late response for {}", path);
        }
    });
}
