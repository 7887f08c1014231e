//! Application and request context
//!
//! [`AppContext`] holds what is shared by every request. [`RequestI18n`] is
//! the per-request result of locale resolution and catalog loading; it is
//! carried in the request's extensions and handed to handlers explicitly,
//! so concurrent requests never observe each other's locale.

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};

use crate::config::Settings;
use crate::i18n::{Catalog, TranslationStore, Translator};
use crate::locale::{localized_href, LocaleResolver};
use crate::utils::errors::Result;

/// Application-wide context shared by all requests
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub resolver: LocaleResolver,
    pub store: TranslationStore,
}

impl AppContext {
    /// Create a new AppContext from its parts
    pub fn new(settings: Settings, resolver: LocaleResolver, store: TranslationStore) -> Self {
        Self {
            settings,
            resolver,
            store,
        }
    }

    /// Build the resolver and translation store described by `settings`
    pub async fn from_settings(settings: Settings) -> Result<Self> {
        let resolver = LocaleResolver::new(&settings.i18n)?;
        let store = TranslationStore::from_config(&settings.i18n).await?;

        Ok(Self::new(settings, resolver, store))
    }
}

/// Locale, root path and translations resolved for one request
#[derive(Debug, Clone)]
pub struct RequestI18n {
    pub locale: String,
    pub root_path: String,
    pub translator: Translator,
}

impl RequestI18n {
    pub fn new(locale: impl Into<String>, root_path: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            locale: locale.into(),
            root_path: root_path.into(),
            translator: Translator::new(catalog),
        }
    }

    /// Translate `key`, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    /// Link to `href` in the current locale
    pub fn href(&self, href: &str) -> String {
        localized_href(&self.locale, href)
    }

    pub fn catalog(&self) -> &Catalog {
        self.translator.catalog()
    }
}

impl<S> FromRequestParts<S> for RequestI18n
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestI18n>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "i18n middleware is not installed"))
    }
}
