//! Fallback page for unrecognized paths.

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    log::warn!("unknown path: /{}", segments.join("/"));
    rsx! {
        div { class: "muted", "Not found" }
    }
}
