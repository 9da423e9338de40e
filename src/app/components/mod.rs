//! Shared UI components for the Dioxus fullstack web UI.

pub mod layout;
pub mod nav;

pub use layout::Layout;
pub use nav::Nav;
