//! HTTP implementation of the news source.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{items_from_document, NewsFetchError, NewsItem, NewsSource};

/// Fetches the news asset with a plain GET.
///
/// No headers, no query string, no retry. Every call is a fresh request.
#[derive(Debug, Clone)]
pub struct HttpNewsService {
    client: Client,
    url: Url,
}

impl HttpNewsService {
    /// Resolve `asset_path` against `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str, asset_path: &str) -> Result<Self, NewsFetchError> {
        Self::with_client(Client::new(), base_url, asset_path)
    }

    pub fn with_client(
        client: Client,
        base_url: &str,
        asset_path: &str,
    ) -> Result<Self, NewsFetchError> {
        // Url::join drops the last path segment unless the base ends in '/'
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let url = Url::parse(&base)
            .and_then(|b| b.join(asset_path.trim_start_matches('/')))
            .map_err(|e| NewsFetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self { client, url })
    }

    /// Fully resolved asset URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl NewsSource for HttpNewsService {
    async fn fetch_news_information(&self) -> Result<Vec<NewsItem>, NewsFetchError> {
        debug!(url = %self.url, "News feed request");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| NewsFetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsFetchError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| NewsFetchError::Transport(e.to_string()))?;
        let doc: Value =
            serde_json::from_str(&body).map_err(|e| NewsFetchError::Decode(e.to_string()))?;

        let items = items_from_document(doc);
        debug!(url = %self.url, count = items.len(), "News feed response");
        Ok(items)
    }
}
