use crate::ui::components::search_hooks::{use_search_service, use_search_state};
use dioxus::prelude::*;

/// Search box; every keystroke goes to the search service, which debounces it
#[component]
pub fn SearchBar() -> Element {
    let search = use_search_service();
    let search_state = use_search_state();
    let mut input_value = use_signal(|| search_state.peek().search_term.clone());

    rsx! {
        div { class: "search",
            div {
                span { class: "search-icon", "🔍" }
                input {
                    r#type: "text",
                    placeholder: "Search through thousands of movies",
                    value: "{input_value}",
                    oninput: move |event| {
                        let term = event.value();
                        input_value.set(term.clone());
                        search.set_search_term(term);
                    },
                }
            }
        }
    }
}
