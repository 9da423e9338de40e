//! Routed views with no behavior of their own.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

/// Titled stub for whatever view the current route resolves to
#[component]
pub(super) fn Placeholder() -> Element {
    let view = use_route::<Route>().view_kind();

    rsx! {
        Layout {
            h1 { "{view}" }
            p { "{view} works!" }
        }
    }
}

#[component]
pub fn Second() -> Element {
    rsx! { Placeholder {} }
}

#[component]
pub fn Third() -> Element {
    rsx! { Placeholder {} }
}

#[component]
pub fn Fourth() -> Element {
    rsx! { Placeholder {} }
}
