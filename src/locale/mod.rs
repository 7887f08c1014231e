//! Locale resolution module
//!
//! Determines the locale of each request from its path prefix and
//! `Accept-Language` header, and builds locale-aware links.

pub mod accept_language;
pub mod links;
pub mod resolver;

pub use accept_language::{parse_accept_language, preferred_locale, LanguagePreference};
pub use links::{localized_href, switch_locale_path};
pub use resolver::{LocaleResolution, LocaleResolver};
