use crate::trending::SearchRecord;
use dioxus::prelude::*;

/// Most searched terms, ranked by search count
#[component]
pub fn TrendingSection(records: Vec<SearchRecord>) -> Element {
    if records.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "trending",
            h2 { "Trending Movies" }

            ul {
                for (index, record) in records.iter().enumerate() {
                    li { key: "{record.id}",
                        p { "{index + 1}" }
                        img { src: "{record.poster_url}", alt: "{record.term}" }
                    }
                }
            }
        }
    }
}
