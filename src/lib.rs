//! News Shell
//!
//! A single-page application shell with four routed views. The `first`
//! view fetches a static JSON news feed and shows the `text` of whichever
//! item is picked; the other three are placeholders.
//!
//! This library provides:
//! - The news feed data service (`news`)
//! - View state and controllers, usable without a UI runtime (`view`)
//! - Data-driven route registration (`routes`)
//! - Web UI (Dioxus router + Pico CSS) (`app`)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

pub mod config;
pub mod news;
pub mod routes;
pub mod view;
