//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::Route;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-err { color: var(--pico-del-color); }
.news-list { list-style: none; padding: 0; }
.news-list li { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.news-list button { margin: 0; padding: 0.25rem 0.75rem; }
.nav-link.active { font-weight: bold; text-decoration: underline; }
.menu-toggle { display: none; }
@media (max-width: 576px) {
    .menu-toggle { display: inline-block; width: auto; }
    .menu { display: none; }
    .menu.open { display: flex; flex-direction: column; }
}
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages. Title and active nav item
/// follow the current route.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let view = use_route::<Route>().view_kind();
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - News Shell", view.title());

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        header { class: "container",
            Nav { active: view }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "News Shell v{version}" }
        }
    }
}
