//! Helper functions and utilities
//!
//! Small string helpers shared by the resolver, the loader and the hydration
//! renderer.

/// Split a URL path into its non-empty segments
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Join segments into an absolute path; no segments yields `/`
pub fn join_segments(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

/// Check that an identifier is safe to use as a locale or namespace
///
/// Safe identifiers are non-empty and contain only ASCII letters, digits,
/// `-` and `_`, so they can be used verbatim as a file name or URL segment.
pub fn is_safe_identifier(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Escape serialized JSON for embedding inside an HTML `<script>` element
pub fn escape_json_for_html(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text for an HTML text node or attribute value
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
