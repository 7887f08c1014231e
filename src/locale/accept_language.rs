//! `Accept-Language` parsing
//!
//! Turns the header into an ordered list of language preferences and picks
//! the first one the application supports.

/// One entry of an `Accept-Language` header
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// Full language tag, lowercased with `_` normalized to `-`
    pub tag: String,
    /// Primary language subtag, lowercased (`en-US` becomes `en`)
    pub language: String,
    /// Quality weight in `0.0..=1.0`
    pub quality: f32,
}

/// Parse an `Accept-Language` value into preferences sorted by quality
///
/// Entries are `tag[;q=value]` separated by commas. A missing or unparsable
/// `q` counts as `1.0`. Each entry keeps its full tag and its primary
/// subtag. Entries with `q=0` are explicitly unacceptable and are dropped,
/// as is the `*` wildcard.
/// Sorting is stable, so equal weights keep header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = header
        .split(',')
        .filter_map(parse_entry)
        .collect();

    preferences.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    preferences
}

fn parse_entry(entry: &str) -> Option<LanguagePreference> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }

    let tag = normalize_tag(tag);
    let language = tag.split('-').next().unwrap_or(&tag).to_string();
    if language.is_empty() {
        return None;
    }

    let quality = parts
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim().eq_ignore_ascii_case("q").then(|| parse_quality(value))
        })
        .next()
        .unwrap_or(1.0);

    if quality <= 0.0 {
        return None;
    }

    Some(LanguagePreference { tag, language, quality })
}

fn normalize_tag(tag: &str) -> String {
    tag.replace('_', "-").to_ascii_lowercase()
}

fn parse_quality(raw: &str) -> f32 {
    match raw.trim().parse::<f32>() {
        Ok(q) if q.is_finite() => q.clamp(0.0, 1.0),
        _ => 1.0,
    }
}

/// Pick the supported locale the header prefers most, or `default_locale`
///
/// Each preference first matches a supported locale by full tag (`zh-TW`),
/// then by primary subtag (`en-US` picks `en`).
pub fn preferred_locale<'a>(
    header: Option<&str>,
    supported: &'a [String],
    default_locale: &'a str,
) -> &'a str {
    let Some(header) = header else {
        return default_locale;
    };

    parse_accept_language(header)
        .iter()
        .find_map(|pref| {
            supported
                .iter()
                .find(|locale| normalize_tag(locale) == pref.tag)
                .or_else(|| supported.iter().find(|locale| normalize_tag(locale) == pref.language))
        })
        .map(String::as_str)
        .unwrap_or(default_locale)
}
