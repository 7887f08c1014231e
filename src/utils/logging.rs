//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured events
//! emitted while resolving locales and loading translations.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{I18nError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| I18nError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "route_i18n.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init()
        .map_err(|e| I18nError::Config(format!("Failed to install log subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of locale resolution for a request
pub fn log_locale_resolved(path: &str, locale: &str, root_path: &str, from_prefix: bool) {
    debug!(
        path = path,
        locale = locale,
        root_path = root_path,
        from_prefix = from_prefix,
        "Locale resolved"
    );
}

/// Log a canonicalizing redirect
pub fn log_locale_redirect(path: &str, location: &str) {
    info!(path = path, location = location, "Redirecting to locale-prefixed URL");
}

/// Log a namespace that could not be loaded
pub fn log_namespace_load_failure(locale: &str, namespace: &str, source: &str, error: &I18nError) {
    if error.severity() <= crate::utils::errors::ErrorSeverity::Info {
        debug!(
            locale = locale,
            namespace = namespace,
            source = source,
            error = %error,
            "Translation namespace not available"
        );
    } else {
        warn!(
            locale = locale,
            namespace = namespace,
            source = source,
            error = %error,
            severity = %error.severity(),
            "Failed to load translation namespace"
        );
    }
}

/// Log a completed catalog load
pub fn log_catalog_ready(locale: &str, requested: usize, loaded: usize, duration_ms: u128) {
    debug!(
        locale = locale,
        requested = requested,
        loaded = loaded,
        duration_ms = duration_ms as u64,
        "Translation catalog ready"
    );
}
