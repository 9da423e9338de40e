//! News Shell
//!
//! Launches the Dioxus app. With the `server` feature the binary also sets
//! up logging and configuration before handing over to Dioxus.

use news_shell::app::App;

#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_shell=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting News Shell");

    // Load configuration
    let config = news_shell::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    // dx sets PORT when it launches us; otherwise use the configured port
    if std::env::var_os("PORT").is_none() {
        std::env::set_var("PORT", config.port.to_string());
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
