//! Error handling for route_i18n
//!
//! This module defines the error type shared by configuration, translation
//! sources and the loader. Only configuration errors are ever fatal; every
//! other variant is logged and recovered where it occurs.

use thiserror::Error;

/// Main error type for route_i18n
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation source returned status {status} for {location}")]
    HttpStatus { status: u16, location: String },

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid translation table for namespace '{namespace}': {reason}")]
    InvalidTable { namespace: String, reason: String },

    #[error("No translation resource registered for {locale}/{namespace}")]
    UnknownResource { locale: String, namespace: String },

    #[error("Invalid namespace identifier: {0}")]
    InvalidNamespace(String),
}

/// Result type alias for route_i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

impl I18nError {
    /// Check if the error is recoverable without operator intervention
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::Config(_) => false,
            I18nError::ConfigSource(_) => false,
            I18nError::Io(_) => true,
            I18nError::Serialization(_) => true,
            I18nError::Http(_) => true,
            I18nError::HttpStatus { .. } => true,
            I18nError::UrlParse(_) => false,
            I18nError::InvalidTable { .. } => true,
            I18nError::UnknownResource { .. } => true,
            I18nError::InvalidNamespace(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            I18nError::Config(_) | I18nError::ConfigSource(_) => ErrorSeverity::Critical,
            I18nError::UrlParse(_) => ErrorSeverity::Critical,
            I18nError::UnknownResource { .. } => ErrorSeverity::Info,
            I18nError::InvalidNamespace(_) => ErrorSeverity::Info,
            I18nError::InvalidTable { .. } | I18nError::Serialization(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = I18nError::Config("default locale missing".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_load_errors_are_recoverable() {
        let err = I18nError::InvalidTable {
            namespace: "common".to_string(),
            reason: "value for 'title' is not a string".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(
            err.to_string(),
            "Invalid translation table for namespace 'common': value for 'title' is not a string"
        );

        let missing = I18nError::UnknownResource {
            locale: "ja".to_string(),
            namespace: "about".to_string(),
        };
        assert!(missing.is_recoverable());
        assert_eq!(missing.severity().to_string(), "INFO");
    }
}
