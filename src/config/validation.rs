//! Configuration validation module
//!
//! Invalid configuration is fatal at startup and is never discovered while
//! a request is being handled.

use std::collections::HashSet;

use crate::utils::errors::{I18nError, Result};
use crate::utils::helpers::is_safe_identifier;
use super::{Settings, SourceKind};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.bind_address.parse::<std::net::SocketAddr>().is_err() {
        return Err(I18nError::Config(format!(
            "Invalid bind address: {}",
            config.bind_address
        )));
    }

    Ok(())
}

/// Validate internationalization configuration
pub fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.supported_locales.is_empty() {
        return Err(I18nError::Config(
            "At least one supported locale is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for locale in &config.supported_locales {
        if !is_safe_identifier(locale) {
            return Err(I18nError::Config(format!(
                "Supported locale '{}' must contain only letters, digits, '-' or '_'",
                locale
            )));
        }
        if !seen.insert(locale.as_str()) {
            return Err(I18nError::Config(format!(
                "Supported locale '{}' is listed more than once",
                locale
            )));
        }
    }

    if !config.supported_locales.contains(&config.default_locale) {
        return Err(I18nError::Config(format!(
            "Default locale '{}' must be in supported locales {:?}",
            config.default_locale, config.supported_locales
        )));
    }

    for namespace in &config.always_namespaces {
        if !is_safe_identifier(namespace) {
            return Err(I18nError::Config(format!(
                "Namespace '{}' must contain only letters, digits, '-' or '_'",
                namespace
            )));
        }
    }

    if config.translations_base.trim().is_empty() {
        return Err(I18nError::Config(
            "Translations base location is required".to_string()
        ));
    }

    if config.source == SourceKind::Http {
        let url = url::Url::parse(&config.translations_base)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(I18nError::Config(format!(
                "Translations base URL must use http or https: {}",
                config.translations_base
            )));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
