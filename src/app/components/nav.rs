//! Navigation component.
//!
//! Links come from the route table so the nav cannot drift from routing.

use dioxus::prelude::*;

use crate::routes::RouteTable;
use crate::view::ViewKind;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The view currently shown
    pub active: ViewKind,
}

/// Navigation bar with mobile toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let table = RouteTable::standard();
    let links: Vec<(ViewKind, String)> = std::iter::once(ViewKind::Home)
        .chain(table.entries().iter().map(|e| e.view))
        .filter_map(|view| table.href(view).map(|href| (view, href)))
        .collect();

    let nav_link_class = |view: ViewKind| {
        if props.active == view {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let mobile_menu_class = if menu_open() { "menu open" } else { "menu" };

    rsx! {
        nav {
            ul {
                li { strong { "News Shell" } }
            }
            ul { class: "{mobile_menu_class}",
                for (view, href) in links {
                    li {
                        a {
                            class: nav_link_class(view),
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{view}"
                        }
                    }
                }
            }
            button {
                class: "menu-toggle outline",
                r#type: "button",
                onclick: move |_| menu_open.toggle(),
                if menu_open() { "Close" } else { "Menu" }
            }
        }
    }
}
