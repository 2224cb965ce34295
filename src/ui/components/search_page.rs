use crate::ui::components::search_hooks::use_search_state;
use crate::ui::components::{MovieCard, SearchBar, Spinner, TrendingSection};
use dioxus::prelude::*;

/// The single page of the app: search box, trending searches and results
#[component]
pub fn SearchPage() -> Element {
    let search_state = use_search_state();
    let state = search_state.read();

    rsx! {
        main {
            div { class: "pattern" }
            div { class: "wrapper",
                header {
                    h1 {
                        "Find "
                        span { class: "text-gradient", "Movies" }
                        " You'll Enjoy Without the Hassle"
                    }
                    SearchBar {}
                }

                TrendingSection { records: state.trending.clone() }

                section { class: "all-movies",
                    h2 { "All Movies" }

                    if state.is_loading {
                        Spinner {}
                    } else if let Some(error) = state.error_message.as_ref() {
                        p { class: "error", "{error}" }
                    } else {
                        ul {
                            for movie in state.movies.iter() {
                                MovieCard { key: "{movie.id}", movie: movie.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
