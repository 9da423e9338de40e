//! Views and their state, independent of the UI runtime.
//!
//! - [`news_feed`] - the view that fetches and shows the news feed
//! - [`state`] - the state object that view owns
//!
//! The placeholder views carry no state; [`ViewKind::mount`] is the
//! factory the route table hands out.

pub mod news_feed;
pub mod state;

use std::fmt;
use std::sync::Arc;

use crate::news::NewsSource;

pub use news_feed::{NewsFeedView, QueryOutcome, QueryRequest};
pub use state::{LoadState, ResultsFlagPolicy, ViewState};

/// Every view the shell can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    NewsFeed,
    Second,
    Third,
    Fourth,
    NotFound,
}

impl ViewKind {
    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Home => "Home",
            ViewKind::NewsFeed => "News",
            ViewKind::Second => "Second",
            ViewKind::Third => "Third",
            ViewKind::Fourth => "Fourth",
            ViewKind::NotFound => "Not Found",
        }
    }

    /// Whether the view exposes `query` / `view_text`
    pub fn is_interactive(self) -> bool {
        matches!(self, ViewKind::NewsFeed)
    }

    /// Construct a fresh instance of the view.
    pub fn mount(self, source: Arc<dyn NewsSource>, policy: ResultsFlagPolicy) -> MountedView {
        match self {
            ViewKind::NewsFeed => MountedView::NewsFeed(NewsFeedView::new(source, policy)),
            other => MountedView::Static(other),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A live view instance.
#[derive(Debug, Clone, PartialEq)]
pub enum MountedView {
    NewsFeed(NewsFeedView),
    /// A view with no state or behavior of its own
    Static(ViewKind),
}

impl MountedView {
    pub fn kind(&self) -> ViewKind {
        match self {
            MountedView::NewsFeed(_) => ViewKind::NewsFeed,
            MountedView::Static(kind) => *kind,
        }
    }

    pub fn into_news_feed(self) -> Option<NewsFeedView> {
        match self {
            MountedView::NewsFeed(view) => Some(view),
            MountedView::Static(_) => None,
        }
    }
}
