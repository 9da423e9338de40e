//! Route registration.
//!
//! The shell's routes as data: a list of `(path, view)` pairs that can be
//! resolved and tested without a UI runtime. The Dioxus [`Route`] enum
//! mirrors [`RouteTable::standard`].
//!
//! [`Route`]: crate::app::Route

use thiserror::Error;
use tracing::debug;

use crate::view::ViewKind;

/// One registered route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path must not be empty")]
    EmptyPath,

    #[error("route path {0:?} must be a single literal segment")]
    Parameterized(String),

    #[error("route path {0:?} is already registered")]
    Duplicate(String),
}

/// Static mapping from literal path segments to views.
///
/// The empty path is the home view; anything unregistered falls back to
/// [`ViewKind::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shell's four routed views
    pub fn standard() -> Self {
        let entries = [
            ("first", ViewKind::NewsFeed),
            ("second", ViewKind::Second),
            ("third", ViewKind::Third),
            ("fourth", ViewKind::Fourth),
        ]
        .into_iter()
        .map(|(path, view)| RouteEntry { path, view })
        .collect();

        Self { entries }
    }

    /// Register `path`. Only single literal segments are accepted.
    pub fn register(&mut self, path: &'static str, view: ViewKind) -> Result<(), RouteError> {
        if path.is_empty() {
            return Err(RouteError::EmptyPath);
        }
        if path.contains('/') || path.contains(':') || path.contains('*') {
            return Err(RouteError::Parameterized(path.to_string()));
        }
        if self.entries.iter().any(|e| e.path == path) {
            return Err(RouteError::Duplicate(path.to_string()));
        }

        self.entries.push(RouteEntry { path, view });
        Ok(())
    }

    /// Resolve a navigated path (`/first`, `first/`, `""`, ...).
    pub fn resolve(&self, path: &str) -> ViewKind {
        let segment = path.trim_matches('/');
        if segment.is_empty() {
            return ViewKind::Home;
        }

        let view = self
            .entries
            .iter()
            .find(|e| e.path == segment)
            .map(|e| e.view)
            .unwrap_or(ViewKind::NotFound);

        debug!(path, ?view, "Route resolved");
        view
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Href for a registered view, if it has one
    pub fn href(&self, view: ViewKind) -> Option<String> {
        if view == ViewKind::Home {
            return Some("/".to_string());
        }
        self.entries
            .iter()
            .find(|e| e.view == view)
            .map(|e| format!("/{}", e.path))
    }
}
