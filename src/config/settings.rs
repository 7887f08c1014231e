//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_address: String,
}

/// Where translation tables are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// `{base}/{locale}/{namespace}.json` on the local filesystem
    Filesystem,
    /// `{base}/{locale}/{namespace}.json` fetched over HTTP
    Http,
}

/// What to do with a request whose path has no locale prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLocalePolicy {
    /// Serve the request with the header-preferred (or default) locale
    SilentDefault,
    /// Redirect to the same path prefixed with the preferred locale
    Redirect,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub supported_locales: Vec<String>,
    pub default_locale: String,
    /// Base directory or base URL holding `{locale}/{namespace}.json`
    pub translations_base: String,
    pub source: SourceKind,
    /// Namespaces loaded for every request regardless of path
    pub always_namespaces: Vec<String>,
    pub missing_locale_policy: MissingLocalePolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily-rolling log file; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Built-in defaults are layered under an optional `config.toml` and
    /// `ROUTE_I18N__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings using a specific configuration file name
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("ROUTE_I18N")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_locales")
                    .with_list_parse_key("i18n.always_namespaces")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::I18nError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1:8000".to_string(),
            },
            i18n: I18nConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported_locales: vec!["en".to_string(), "ja".to_string()],
            default_locale: "en".to_string(),
            translations_base: "locales".to_string(),
            source: SourceKind::Filesystem,
            always_namespaces: vec![
                "common".to_string(),
                "error".to_string(),
                "metadata".to_string(),
            ],
            missing_locale_policy: MissingLocalePolicy::SilentDefault,
        }
    }
}
