use crate::tmdb::Movie;
use dioxus::prelude::*;

/// Single result in the movie grid
#[component]
pub fn MovieCard(movie: Movie) -> Element {
    let rating = movie
        .vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string());
    let language = movie.original_language.clone().unwrap_or_default();
    let year = movie.release_year().unwrap_or("N/A").to_string();

    rsx! {
        li { class: "movie-card",
            if let Some(poster) = movie.poster_url() {
                img { src: "{poster}", alt: "{movie.title}" }
            } else {
                div { class: "no-poster", "No Poster" }
            }

            div { class: "mt-4",
                h3 { "{movie.title}" }

                div { class: "content",
                    div { class: "rating",
                        span { "⭐" }
                        p { "{rating}" }
                    }
                    span { "•" }
                    p { class: "lang", "{language}" }
                    span { "•" }
                    p { class: "year", "{year}" }
                }
            }
        }
    }
}
