//! Per-view state for the news feed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::news::{NewsFetchError, NewsItem};

/// When the legacy "results ready" flag is raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsFlagPolicy {
    /// Raise the flag only when a fetch succeeds.
    #[default]
    OnArrival,
    /// Raise the flag as soon as the request is issued, whatever the outcome.
    OnSubscribe,
}

/// Load status of the fetched collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotStarted,
    Pending,
    Loaded(Vec<NewsItem>),
    Failed(NewsFetchError),
}

impl LoadState {
    pub fn items(&self) -> Option<&[NewsItem]> {
        match self {
            LoadState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn error(&self) -> Option<&NewsFetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Everything the news feed view holds between renders.
///
/// Owned by one view instance; a remounted view starts from
/// [`ViewState::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    policy: ResultsFlagPolicy,
    results: LoadState,
    results_ready: bool,
    selected_text: Option<String>,
    selected_text_ready: bool,
    search_text: String,
    /// Last request id handed out; keeps counting across resets
    last_id: u64,
    /// Ids up to this one were issued before the last reset
    reset_at: u64,
    issued: u64,
    in_flight: u32,
}

impl ViewState {
    pub fn new(policy: ResultsFlagPolicy) -> Self {
        Self {
            policy,
            results: LoadState::NotStarted,
            results_ready: false,
            selected_text: None,
            selected_text_ready: false,
            search_text: String::new(),
            last_id: 0,
            reset_at: 0,
            issued: 0,
            in_flight: 0,
        }
    }

    /// Back to the freshly mounted state. The flag policy is kept, and
    /// outcomes of requests issued before the reset are dropped.
    pub fn reset(&mut self) {
        let last_id = self.last_id;
        *self = Self::new(self.policy);
        self.last_id = last_id;
        self.reset_at = last_id;
    }

    pub fn policy(&self) -> ResultsFlagPolicy {
        self.policy
    }

    pub fn results(&self) -> &LoadState {
        &self.results
    }

    pub fn results_ready(&self) -> bool {
        self.results_ready
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected_text.as_deref()
    }

    pub fn selected_text_ready(&self) -> bool {
        self.selected_text_ready
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Number of requests issued since the last reset
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Requests issued but not yet completed
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Record a newly issued request and return its id.
    pub(crate) fn begin_request(&mut self) -> u64 {
        self.last_id += 1;
        self.issued += 1;
        self.in_flight += 1;

        if !matches!(self.results, LoadState::Loaded(_)) {
            self.results = LoadState::Pending;
        }
        if self.policy == ResultsFlagPolicy::OnSubscribe {
            self.results_ready = true;
        }

        self.last_id
    }

    /// Apply the outcome of request `id`. Outcomes apply in arrival order.
    pub(crate) fn finish_request(&mut self, id: u64, result: Result<Vec<NewsItem>, NewsFetchError>) {
        if id <= self.reset_at {
            debug!(request = id, "Dropping outcome issued before reset");
            return;
        }

        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(items) => {
                debug!(request = id, count = items.len(), "News feed loaded");
                self.results = LoadState::Loaded(items);
                self.results_ready = true;
            }
            Err(err) => {
                warn!(request = id, error = %err, "News feed fetch failed");
                if !matches!(self.results, LoadState::Loaded(_)) {
                    self.results = LoadState::Failed(err);
                }
            }
        }
    }

    /// Show the detail text of `item`. A missing `text` clears the field.
    pub fn select(&mut self, item: &NewsItem) {
        self.selected_text = item.text();
        self.selected_text_ready = true;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Loaded items whose text contains the search text (case-insensitive),
    /// with their index in the full collection.
    ///
    /// A blank search shows everything, including items without text.
    pub fn visible_results(&self) -> Vec<(usize, &NewsItem)> {
        let Some(items) = self.results.items() else {
            return Vec::new();
        };

        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return items.iter().enumerate().collect();
        }

        items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.text()
                    .map(|t| t.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ResultsFlagPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(texts: &[&str]) -> Vec<NewsItem> {
        texts
            .iter()
            .map(|t| NewsItem::new(json!({ "text": t })))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.results(), &LoadState::NotStarted);
        assert!(!state.results_ready());
        assert_eq!(state.selected_text(), None);
        assert!(!state.selected_text_ready());
        assert_eq!(state.policy(), ResultsFlagPolicy::OnArrival);
    }

    #[test]
    fn test_on_subscribe_raises_flag_at_issue() {
        let mut state = ViewState::new(ResultsFlagPolicy::OnSubscribe);
        state.begin_request();
        assert!(state.results_ready());
        assert!(state.results().is_pending());
    }

    #[test]
    fn test_on_arrival_waits_for_success() {
        let mut state = ViewState::new(ResultsFlagPolicy::OnArrival);
        let id = state.begin_request();
        assert!(!state.results_ready());

        state.finish_request(id, Ok(items(&["alpha"])));
        assert!(state.results_ready());
        assert_eq!(state.results().items().map(|i| i.len()), Some(1));
    }

    #[test]
    fn test_failure_keeps_loaded_data() {
        let mut state = ViewState::default();
        let first = state.begin_request();
        let second = state.begin_request();
        assert_eq!(state.in_flight(), 2);

        state.finish_request(second, Ok(items(&["alpha"])));
        state.finish_request(
            first,
            Err(NewsFetchError::Transport("connection reset".to_string())),
        );

        assert_eq!(state.in_flight(), 0);
        assert_eq!(state.results().items(), Some(items(&["alpha"]).as_slice()));
    }

    #[test]
    fn test_failure_before_load_is_recorded() {
        let mut state = ViewState::default();
        let id = state.begin_request();
        state.finish_request(id, Err(NewsFetchError::Decode("eof".to_string())));

        assert_eq!(
            state.results().error(),
            Some(&NewsFetchError::Decode("eof".to_string()))
        );
        assert!(!state.results_ready());
    }

    #[test]
    fn test_reissue_while_loaded_keeps_data_visible() {
        let mut state = ViewState::default();
        let id = state.begin_request();
        state.finish_request(id, Ok(items(&["alpha"])));

        state.begin_request();
        assert!(state.results().items().is_some());
    }

    #[test]
    fn test_reset_keeps_policy() {
        let mut state = ViewState::new(ResultsFlagPolicy::OnSubscribe);
        let id = state.begin_request();
        state.finish_request(id, Ok(items(&["alpha"])));
        state.select(&items(&["alpha"])[0]);
        state.set_search_text("al");

        state.reset();
        assert_eq!(state.policy(), ResultsFlagPolicy::OnSubscribe);
        assert_eq!(state.results(), &LoadState::NotStarted);
        assert!(!state.results_ready());
        assert_eq!(state.selected_text(), None);
        assert!(!state.selected_text_ready());
        assert_eq!(state.search_text(), "");
        assert_eq!(state.issued(), 0);
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_outcome_from_before_reset_is_dropped() {
        let mut state = ViewState::default();
        let old = state.begin_request();
        state.reset();
        let fresh = state.begin_request();
        assert_ne!(old, fresh);

        state.finish_request(old, Ok(items(&["stale"])));
        assert!(state.results().is_pending());
        assert!(!state.results_ready());
        assert_eq!(state.in_flight(), 1);

        state.finish_request(fresh, Ok(items(&["fresh"])));
        assert_eq!(state.results().items(), Some(items(&["fresh"]).as_slice()));
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_visible_results_filters_by_search_text() {
        let mut state = ViewState::default();
        let id = state.begin_request();
        let mut loaded = items(&["Alpha launch", "beta release", "gamma"]);
        loaded.push(NewsItem::new(json!({ "title": "untitled" })));
        state.finish_request(id, Ok(loaded));

        assert_eq!(state.visible_results().len(), 4);

        state.set_search_text("  ALPHA ");
        let visible: Vec<_> = state
            .visible_results()
            .iter()
            .map(|(i, item)| (*i, item.text()))
            .collect();
        assert_eq!(visible, vec![(0, Some("Alpha launch".to_string()))]);

        state.set_search_text("release");
        let indices: Vec<usize> = state.visible_results().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1]);

        state.set_search_text("zeta");
        assert!(state.visible_results().is_empty());
    }

    #[test]
    fn test_visible_results_empty_before_load() {
        let state = ViewState::default();
        assert!(state.visible_results().is_empty());
    }

    #[test]
    fn test_policy_deserializes_snake_case() {
        let policy: ResultsFlagPolicy = serde_json::from_str("\"on_subscribe\"").unwrap();
        assert_eq!(policy, ResultsFlagPolicy::OnSubscribe);
        let policy: ResultsFlagPolicy = serde_json::from_str("\"on_arrival\"").unwrap();
        assert_eq!(policy, ResultsFlagPolicy::OnArrival);
    }
}
