//! News feed view controller.
//!
//! Framework-free: `query()` returns immediately with a [`QueryRequest`]
//! that the caller drives (the Dioxus page spawns it), then feeds the
//! outcome back through [`NewsFeedView::complete`].

use std::sync::Arc;

use tracing::debug;

use super::state::{ResultsFlagPolicy, ViewState};
use crate::news::{FetchFuture, NewsFetchError, NewsItem, NewsSource};

/// An issued, not yet awaited, news fetch.
///
/// Nothing goes over the wire until [`QueryRequest::run`] is awaited.
pub struct QueryRequest {
    id: u64,
    fetch: FetchFuture,
}

impl QueryRequest {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Perform the fetch.
    pub async fn run(self) -> QueryOutcome {
        let result = self.fetch.await;
        QueryOutcome {
            id: self.id,
            result,
        }
    }
}

impl std::fmt::Debug for QueryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRequest").field("id", &self.id).finish()
    }
}

/// Result of one [`QueryRequest`]
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub id: u64,
    pub result: Result<Vec<NewsItem>, NewsFetchError>,
}

/// The routed view that fetches and displays the news feed.
#[derive(Clone)]
pub struct NewsFeedView {
    source: Arc<dyn NewsSource>,
    state: ViewState,
}

impl NewsFeedView {
    pub fn new(source: Arc<dyn NewsSource>, policy: ResultsFlagPolicy) -> Self {
        let mut view = Self {
            source,
            state: ViewState::new(policy),
        };
        view.initialize();
        view
    }

    /// Reset both flags, the results and the selection.
    pub fn initialize(&mut self) {
        self.state.reset();
    }

    /// Issue one news fetch. Never blocks and never fails here; transport
    /// errors arrive later through [`QueryOutcome`].
    pub fn query(&mut self) -> QueryRequest {
        let id = self.state.begin_request();
        debug!(request = id, policy = ?self.state.policy(), "News feed query issued");

        let source = Arc::clone(&self.source);
        QueryRequest {
            id,
            fetch: Box::pin(async move { source.fetch_news_information().await }),
        }
    }

    /// Apply a finished fetch to the view state.
    pub fn complete(&mut self, outcome: QueryOutcome) {
        self.state.finish_request(outcome.id, outcome.result);
    }

    /// Show the `text` of a clicked item.
    pub fn view_text(&mut self, item: &NewsItem) {
        self.state.select(item);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

impl PartialEq for NewsFeedView {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source) && self.state == other.state
    }
}

impl std::fmt::Debug for NewsFeedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsFeedView")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
