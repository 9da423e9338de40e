//! Dioxus fullstack page components, one per route.

mod home;
mod news;
mod not_found;
mod placeholder;

pub use home::Home;
pub use news::First;
pub use not_found::NotFound;
pub use placeholder::{Fourth, Second, Third};
