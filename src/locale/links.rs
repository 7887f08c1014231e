//! Locale-aware URL helpers for rendering code

use crate::utils::helpers::{join_segments, path_segments};

/// Prefix `href` with the active locale, e.g. `("ja", "about")` → `/ja/about`
pub fn localized_href(locale: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("/{}{}", locale, href)
    } else {
        format!("/{}/{}", locale, href)
    }
}

/// Path a locale switcher should navigate to
///
/// `root_path` is the request path with its locale prefix already removed,
/// so it is prefixed as is, even when its first segment looks like a locale.
/// Returns `None` when `new_locale` is not supported.
pub fn switch_locale_path(root_path: &str, new_locale: &str, supported: &[String]) -> Option<String> {
    if !supported.iter().any(|l| l == new_locale) {
        return None;
    }

    Some(localized_href(new_locale, &join_segments(&path_segments(root_path))))
}
