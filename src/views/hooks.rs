use crate::loader::{spawn_collection, FetchScope, LoadSlot};
use crate::query::{ListingState, ScreenKind};
use crate::reconciler::{Input, LocationPort, Reconciler, UserAction};
use crate::storage::LocalPreferenceStore;
use crate::Route;
use gloo_timers::callback::Timeout;
use log::warn;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Loads one collection for the lifetime of the calling component.
#[hook]
pub fn use_collection<T>(path: &'static str) -> UseStateHandle<LoadSlot<T>>
where
    T: DeserializeOwned + 'static,
{
    let slot = use_state(LoadSlot::<T>::default);

    {
        let slot = slot.clone();
        use_effect_with(path, move |path| {
            let scope = FetchScope::new();
            spawn_collection(&scope, *path, move |items| slot.set(LoadSlot::Ready(items)));
            move || scope.close()
        });
    }

    slot
}

struct RouterLocation {
    navigator: Option<Navigator>,
    route: Route,
}

impl LocationPort for RouterLocation {
    fn current_query(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_query(&mut self, pairs: &[(&'static str, String)]) {
        let Some(navigator) = self.navigator.as_ref() else {
            warn!("No router available to write {:?}", pairs);
            return;
        };

        if let Err(err) = navigator.replace_with_query(&self.route, &pairs.to_vec()) {
            warn!("Failed to update the query string: {}", err);
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ListingHandle {
    pub state: ListingState,
    pub dispatch: Callback<UserAction>,
}

/// Binds a listing screen to the URL and the stored view preference.
///
/// URL changes are queued and drained on the next tick rather than inside
/// the effect that saw them; user actions drain immediately. The URL write
/// a drain asks for happens after the reconciler borrow is released, so the
/// router may re-render synchronously without tripping over it.
#[hook]
pub fn use_listing(screen: ScreenKind, route: Route) -> ListingHandle {
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let update = use_force_update();

    let reconciler = {
        let query = query.clone();
        use_mut_ref(move || Reconciler::mount(screen, &query, LocalPreferenceStore))
    };
    let location = use_mut_ref(move || RouterLocation { navigator, route });

    let flush: Rc<dyn Fn()> = {
        let reconciler = reconciler.clone();
        let location: Rc<RefCell<RouterLocation>> = location.clone();
        Rc::new(move || {
            let current = location.borrow().current_query();
            let drained = reconciler.borrow_mut().drain(&current);
            if let Some(pairs) = drained.url_write {
                location.borrow_mut().replace_query(&pairs);
            }
            if drained.changed {
                update.force_update();
            }
        })
    };

    {
        let reconciler = reconciler.clone();
        let flush = flush.clone();
        use_effect_with(query, move |query| {
            reconciler
                .borrow_mut()
                .enqueue(Input::UrlChanged(query.clone()));
            let timeout = Timeout::new(0, move || flush());
            move || drop(timeout)
        });
    }

    let dispatch = {
        let reconciler = reconciler.clone();
        Callback::from(move |action: UserAction| {
            reconciler.borrow_mut().dispatch(action);
            flush();
        })
    };

    let state = reconciler.borrow().state().clone();
    ListingHandle { state, dispatch }
}
