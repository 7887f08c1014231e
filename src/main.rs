//! route_i18n server
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use route_i18n::{
    config::Settings,
    handlers::build_router,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", route_i18n::info());

    info!("Registering translations...");
    let app = Arc::new(AppContext::from_settings(settings.clone()).await?);

    let router = build_router(app);

    let listener = TcpListener::bind(&settings.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", settings.server.bind_address))?;
    info!(
        address = %settings.server.bind_address,
        locales = ?settings.i18n.supported_locales,
        default_locale = %settings.i18n.default_locale,
        policy = ?settings.i18n.missing_locale_policy,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("route_i18n has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
