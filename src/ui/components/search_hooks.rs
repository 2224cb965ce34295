use crate::search::{SearchHandle, SearchState};
use crate::AppContext;
use dioxus::prelude::*;

/// Hook to access the search service
pub fn use_search_service() -> SearchHandle {
    let context = use_context::<AppContext>();
    context.search_handle.clone()
}

/// Search state mirrored from the service so components can read it synchronously
#[derive(Clone)]
pub struct SharedSearchState {
    pub state: Signal<SearchState>,
}

/// Provider component to make search state available throughout the app
#[component]
pub fn SearchStateProvider(children: Element) -> Element {
    let search = use_search_service();
    let state_signal = use_signal({
        let search = search.clone();
        move || search.state()
    });
    let shared_state = SharedSearchState {
        state: state_signal,
    };

    use_context_provider(|| shared_state.clone());

    // Follow the service's state channel for the lifetime of the app
    use_effect({
        let mut state_signal = shared_state.state;
        move || {
            let search = search.clone();
            spawn(async move {
                let mut state_rx = search.subscribe();
                while state_rx.changed().await.is_ok() {
                    let state = state_rx.borrow_and_update().clone();
                    state_signal.set(state);
                }
            });
        }
    });

    rsx! {
        {children}
    }
}

/// Hook to access the current search state
pub fn use_search_state() -> Signal<SearchState> {
    let state = use_context::<SharedSearchState>();
    state.state
}
