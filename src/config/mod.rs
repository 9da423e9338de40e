//! Configuration management

use serde::{Deserialize, Serialize};

use crate::news::NEWS_ASSET_PATH;
use crate::view::ResultsFlagPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin the news asset is fetched from outside the browser
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,

    #[serde(default = "default_news_asset_path")]
    pub news_asset_path: String,

    /// `on_arrival` (default) or `on_subscribe`
    #[serde(default)]
    pub results_flag: ResultsFlagPolicy,
}

fn default_port() -> u16 {
    8080
}

fn default_asset_base_url() -> String {
    format!("http://127.0.0.1:{}", default_port())
}

fn default_news_asset_path() -> String {
    NEWS_ASSET_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            asset_base_url: default_asset_base_url(),
            news_asset_path: default_news_asset_path(),
            results_flag: ResultsFlagPolicy::default(),
        }
    }
}

/// Base URL for the news asset: the page origin in the browser, the
/// configured base elsewhere.
pub fn asset_base_url(config: &Config) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    config.asset_base_url.clone()
}

#[cfg(feature = "server")]
pub fn get_config_dir() -> std::path::PathBuf {
    directories::ProjectDirs::from("org", "news-shell", "news-shell")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(&get_config_dir().join("config"))
}

/// Defaults, then the optional config file at `path` (any extension the
/// `config` crate knows), then `NEWS_SHELL_*` environment variables.
#[cfg(feature = "server")]
pub fn load_config_from(path: &std::path::Path) -> anyhow::Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("asset_base_url", default_asset_base_url())?
        .set_default("news_asset_path", default_news_asset_path())?
        .set_default("results_flag", "on_arrival")?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&path.to_string_lossy()).required(false))
        // Override with environment variables (NEWS_SHELL_PORT, NEWS_SHELL_RESULTS_FLAG, etc.)
        .add_source(
            ::config::Environment::with_prefix("NEWS_SHELL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.news_asset_path, "assets/getNewsInformation.json");
        assert_eq!(config.results_flag, ResultsFlagPolicy::OnArrival);
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 9090\nresults_flag = \"on_subscribe\"\n",
        )
        .unwrap();

        let config = load_config_from(&dir.path().join("config")).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.results_flag, ResultsFlagPolicy::OnSubscribe);
        assert_eq!(config.asset_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "port = 9090\n").unwrap();

        std::env::set_var("NEWS_SHELL_PORT", "7070");
        std::env::set_var("NEWS_SHELL_RESULTS_FLAG", "on_subscribe");
        let result = load_config_from(&dir.path().join("config"));
        std::env::remove_var("NEWS_SHELL_PORT");
        std::env::remove_var("NEWS_SHELL_RESULTS_FLAG");

        let config = result.unwrap();
        assert_eq!(config.port, 7070);
        assert_eq!(config.results_flag, ResultsFlagPolicy::OnSubscribe);
    }

    #[test]
    fn test_asset_base_url_uses_config_off_browser() {
        let config = Config {
            asset_base_url: "http://news.local".to_string(),
            ..Config::default()
        };
        assert_eq!(asset_base_url(&config), "http://news.local");
    }
}
