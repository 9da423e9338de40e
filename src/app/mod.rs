//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::config::{asset_base_url, Config};
use crate::news::{HttpNewsService, NewsFetchError, NewsItem, NewsSource};
use crate::routes::RouteTable;
use crate::view::ViewKind;
use pages::{First, Fourth, Home, NotFound, Second, Third};

/// News source shared by every page that fetches the feed
#[derive(Clone)]
pub struct NewsSourceContext(pub Arc<dyn NewsSource>);

/// Root app component with routing
#[component]
pub fn App() -> Element {
    let config = use_app_config();
    let config = use_context_provider(move || config);
    use_context_provider(|| NewsSourceContext(news_source(&config)));

    rsx! {
        Router::<Route> {}
    }
}

/// The config the server rendered with.
///
/// Resolved during SSR and carried to the browser in the hydration data, so
/// the client runs queries with the server's `results_flag`.
pub fn use_app_config() -> Config {
    use_server_cached(launch_config)
}

/// Config provided at launch, or defaults when launched without one
fn launch_config() -> Config {
    try_consume_context::<Config>().unwrap_or_default()
}

/// Application routes. Must agree with [`crate::routes::RouteTable::standard`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/first")]
    First {},
    #[route("/second")]
    Second {},
    #[route("/third")]
    Third {},
    #[route("/fourth")]
    Fourth {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The view this route renders, looked up in the route table
    pub fn view_kind(&self) -> ViewKind {
        RouteTable::standard().resolve(&self.to_string())
    }
}

/// Stands in for the HTTP source when its URL cannot be built, so the
/// failure shows up on the page instead of at startup.
struct UnavailableSource(NewsFetchError);

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl NewsSource for UnavailableSource {
    async fn fetch_news_information(&self) -> Result<Vec<NewsItem>, NewsFetchError> {
        Err(self.0.clone())
    }
}

fn news_source(config: &Config) -> Arc<dyn NewsSource> {
    match HttpNewsService::new(&asset_base_url(config), &config.news_asset_path) {
        Ok(svc) => Arc::new(svc),
        Err(e) => {
            tracing::error!("News source unavailable: {}", e);
            Arc::new(UnavailableSource(e))
        }
    }
}
