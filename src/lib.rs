//! route_i18n
//!
//! Locale resolution and translation lookup for server-rendered web
//! applications. For each request the locale is taken from the path prefix
//! (or the `Accept-Language` header), the namespaces the page needs are
//! loaded from per-locale JSON tables, and a translator is handed to
//! rendering code and serialized for client-side hydration.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod locale;
pub mod middleware;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use i18n::{Catalog, TranslationStore, Translator};
pub use locale::{LocaleResolution, LocaleResolver};
pub use state::{AppContext, HydrationPayload, RequestI18n};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
