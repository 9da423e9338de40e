//! Home page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::routes::RouteTable;

/// Default view at `/`.
#[component]
pub fn Home() -> Element {
    let table = RouteTable::standard();
    let entries = table.entries().to_vec();

    rsx! {
        Layout {
            h1 { "News Shell" }
            p { "Pick a view." }
            ul {
                for entry in entries {
                    li {
                        a { href: "/{entry.path}", "{entry.view}" }
                    }
                }
            }
        }
    }
}
