//! Locale resolution
//!
//! Decides which supported locale governs a request from its path prefix and
//! `Accept-Language` header, and whether the request should instead be
//! redirected to its locale-prefixed URL.

use crate::config::{I18nConfig, MissingLocalePolicy};
use crate::config::validation::validate_i18n_config;
use crate::utils::errors::Result;
use crate::utils::helpers::{join_segments, path_segments};
use crate::utils::logging::{log_locale_redirect, log_locale_resolved};
use super::accept_language::preferred_locale;

/// Outcome of resolving a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleResolution {
    /// Serve the request in `locale`; `root_path` has the locale prefix removed
    Serve { locale: String, root_path: String },
    /// Do not serve; answer with a temporary redirect to `location`
    Redirect { location: String },
}

impl LocaleResolution {
    /// The resolved locale, unless this is a redirect
    pub fn locale(&self) -> Option<&str> {
        match self {
            LocaleResolution::Serve { locale, .. } => Some(locale),
            LocaleResolution::Redirect { .. } => None,
        }
    }

    /// The locale-agnostic path, unless this is a redirect
    pub fn root_path(&self) -> Option<&str> {
        match self {
            LocaleResolution::Serve { root_path, .. } => Some(root_path),
            LocaleResolution::Redirect { .. } => None,
        }
    }

    /// Redirect target, if the request must be redirected
    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            LocaleResolution::Redirect { location } => Some(location),
            LocaleResolution::Serve { .. } => None,
        }
    }
}

/// Resolves the locale of incoming requests
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    supported_locales: Vec<String>,
    default_locale: String,
    policy: MissingLocalePolicy,
}

impl LocaleResolver {
    /// Create a resolver, rejecting an inconsistent locale configuration
    pub fn new(config: &I18nConfig) -> Result<Self> {
        validate_i18n_config(config)?;

        Ok(Self {
            supported_locales: config.supported_locales.clone(),
            default_locale: config.default_locale.clone(),
            policy: config.missing_locale_policy,
        })
    }

    /// Resolve `path` using the optional `Accept-Language` header value
    pub fn resolve(&self, path: &str, accept_language: Option<&str>) -> LocaleResolution {
        let segments = path_segments(path);

        if let Some((first, rest)) = segments.split_first() {
            if self.is_supported(first) {
                let root_path = join_segments(rest);
                log_locale_resolved(path, first, &root_path, true);
                return LocaleResolution::Serve {
                    locale: first.to_string(),
                    root_path,
                };
            }
        }

        let preferred = preferred_locale(
            accept_language,
            &self.supported_locales,
            &self.default_locale,
        );

        match self.policy {
            MissingLocalePolicy::SilentDefault => {
                let root_path = if path.starts_with('/') {
                    path.to_string()
                } else {
                    format!("/{}", path)
                };
                log_locale_resolved(path, preferred, &root_path, false);
                LocaleResolution::Serve {
                    locale: preferred.to_string(),
                    root_path,
                }
            }
            MissingLocalePolicy::Redirect => {
                let location = if path.starts_with('/') {
                    format!("/{}{}", preferred, path)
                } else {
                    format!("/{}/{}", preferred, path)
                };
                log_locale_redirect(path, &location);
                LocaleResolution::Redirect { location }
            }
        }
    }

    /// Check if a locale is in the supported set
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    /// Get supported locales
    pub fn supported_locales(&self) -> &[String] {
        &self.supported_locales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn resolver(policy: MissingLocalePolicy) -> LocaleResolver {
        LocaleResolver::new(&I18nConfig {
            supported_locales: vec!["en".to_string(), "ja".to_string(), "fr".to_string()],
            default_locale: "en".to_string(),
            missing_locale_policy: policy,
            ..I18nConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_prefix_selects_locale_and_is_stripped() {
        let r = resolver(MissingLocalePolicy::Redirect);
        assert_eq!(
            r.resolve("/ja/about", Some("fr")),
            LocaleResolution::Serve { locale: "ja".into(), root_path: "/about".into() }
        );
        assert_eq!(
            r.resolve("/fr", None),
            LocaleResolution::Serve { locale: "fr".into(), root_path: "/".into() }
        );
        assert_eq!(r.resolve("/ja/blog/post-1/", None).root_path(), Some("/blog/post-1"));
    }

    #[test]
    fn test_silent_default_keeps_whole_path() {
        let r = resolver(MissingLocalePolicy::SilentDefault);
        assert_eq!(
            r.resolve("/about", None),
            LocaleResolution::Serve { locale: "en".into(), root_path: "/about".into() }
        );
        assert_eq!(r.resolve("/about", Some("ja-JP,en;q=0.5")).locale(), Some("ja"));
        assert_eq!(r.resolve("/de/about", Some("de")).root_path(), Some("/de/about"));
    }

    #[test]
    fn test_empty_path_has_no_locale_segment() {
        let silent = resolver(MissingLocalePolicy::SilentDefault);
        assert_eq!(
            silent.resolve("/", None),
            LocaleResolution::Serve { locale: "en".into(), root_path: "/".into() }
        );
        assert_eq!(silent.resolve("", None).root_path(), Some("/"));

        let redirect = resolver(MissingLocalePolicy::Redirect);
        assert_eq!(redirect.resolve("/", Some("ja")).redirect_location(), Some("/ja/"));
    }

    #[test]
    fn test_redirect_prefixes_preferred_locale() {
        let r = resolver(MissingLocalePolicy::Redirect);
        assert_matches!(
            r.resolve("/about", Some("fr;q=0.5,ja;q=0.9")),
            LocaleResolution::Redirect { location } if location == "/ja/about"
        );
        assert_eq!(r.resolve("/about", None).redirect_location(), Some("/en/about"));
        assert_eq!(r.resolve("/about", None).locale(), None);
    }

    #[test]
    fn test_locale_match_is_exact() {
        let r = resolver(MissingLocalePolicy::SilentDefault);
        assert_eq!(r.resolve("/JA/about", None).root_path(), Some("/JA/about"));
        assert_eq!(r.resolve("/japan", None).locale(), Some("en"));
    }

    #[test]
    fn test_new_rejects_unsupported_default() {
        let result = LocaleResolver::new(&I18nConfig {
            supported_locales: vec!["en".to_string()],
            default_locale: "ja".to_string(),
            ..I18nConfig::default()
        });
        assert!(result.is_err());
    }
}
