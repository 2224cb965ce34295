use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status",
            div { class: "spinner-ring" }
            span { class: "sr-only", "Loading..." }
        }
    }
}
