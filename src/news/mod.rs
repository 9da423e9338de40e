//! News feed data access.
//!
//! The feed is a static JSON asset shipped with the app. Nothing about its
//! shape is enforced: each element of the top-level array becomes a
//! [`NewsItem`], and the only attribute the UI ever reads is `text`.

mod http;

pub use http::HttpNewsService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Relative path of the news asset, resolved against the app origin.
pub const NEWS_ASSET_PATH: &str = "assets/getNewsInformation.json";

/// One untyped entry of the news feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsItem(Value);

impl NewsItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The item's `text` attribute as display text.
    ///
    /// Strings are returned as-is, other values in their JSON form. A
    /// missing or `null` attribute (or an item that is not an object)
    /// yields `None`.
    pub fn text(&self) -> Option<String> {
        match self.0.get("text")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Raw JSON value of the item
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for NewsItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Turn a parsed feed document into items.
///
/// An array yields one item per element. Any other document is accepted
/// as a single item.
pub fn items_from_document(doc: Value) -> Vec<NewsItem> {
    match doc {
        Value::Array(values) => values.into_iter().map(NewsItem).collect(),
        other => {
            warn!("News feed is not a JSON array, treating it as a single item");
            vec![NewsItem(other)]
        }
    }
}

/// Failure of the single news fetch.
///
/// Carries messages rather than source errors so it can be cloned into view
/// state and UI signals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsFetchError {
    #[error("invalid news feed url: {0}")]
    InvalidUrl(String),

    #[error("news feed request failed: {0}")]
    Transport(String),

    #[error("news feed request to {url} returned {status}")]
    Status { status: u16, url: String },

    #[error("news feed is not valid JSON: {0}")]
    Decode(String),
}

/// Pending result of a news fetch. Browser futures are not `Send`.
#[cfg(not(target_arch = "wasm32"))]
pub type FetchFuture = futures::future::BoxFuture<'static, Result<Vec<NewsItem>, NewsFetchError>>;
#[cfg(target_arch = "wasm32")]
pub type FetchFuture =
    futures::future::LocalBoxFuture<'static, Result<Vec<NewsItem>, NewsFetchError>>;

/// Source of the news feed.
///
/// `fetch_news_information` is a cold producer: calling it does nothing
/// until the returned future is awaited, and every call performs its own
/// request.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait NewsSource: Send + Sync {
    async fn fetch_news_information(&self) -> Result<Vec<NewsItem>, NewsFetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_string_attribute() {
        let item = NewsItem::new(json!({ "text": "alpha", "id": 1 }));
        assert_eq!(item.text(), Some("alpha".to_string()));
    }

    #[test]
    fn test_text_missing_or_null() {
        assert_eq!(NewsItem::new(json!({ "title": "no text" })).text(), None);
        assert_eq!(NewsItem::new(json!({ "text": null })).text(), None);
        assert_eq!(NewsItem::new(json!("bare string")).text(), None);
        assert_eq!(NewsItem::new(json!(42)).text(), None);
    }

    #[test]
    fn test_text_of_non_string_attribute() {
        assert_eq!(
            NewsItem::new(json!({ "text": 7 })).text(),
            Some("7".to_string())
        );
        assert_eq!(
            NewsItem::new(json!({ "text": ["a", "b"] })).text(),
            Some("[\"a\",\"b\"]".to_string())
        );
    }

    #[test]
    fn test_items_from_array_document() {
        let items = items_from_document(json!([{ "text": "alpha" }, { "text": "beta" }, 3]));
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].text(), Some("beta".to_string()));
        assert_eq!(items[2].value(), &json!(3));
    }

    #[test]
    fn test_items_from_non_array_document() {
        let items = items_from_document(json!({ "text": "only" }));
        assert_eq!(items, vec![NewsItem::new(json!({ "text": "only" }))]);
    }

    #[test]
    fn test_news_item_is_transparent_json() {
        let item: NewsItem = serde_json::from_str(r#"{"text":"alpha"}"#).unwrap();
        assert_eq!(item.text(), Some("alpha".to_string()));
        assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"text":"alpha"}"#);
    }

    #[test]
    fn test_error_display() {
        let err = NewsFetchError::Status {
            status: 404,
            url: "http://localhost/assets/getNewsInformation.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "news feed request to http://localhost/assets/getNewsInformation.json returned 404"
        );
    }
}
