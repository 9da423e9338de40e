//! Fallback for paths outside the route table.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route for path");

    rsx! {
        Layout {
            h1 { "Page not found" }
            p { "Nothing is routed at " code { "{path}" } "." }
            a { href: "/", "Back home" }
        }
    }
}
