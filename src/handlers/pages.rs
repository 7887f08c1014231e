//! Page rendering handler
//!
//! Renders a minimal server-side page from the request's i18n state, with
//! locale-switch links and the hydration payload for client code.

use std::sync::Arc;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::locale::switch_locale_path;
use crate::state::{AppContext, HydrationPayload, RequestI18n};
use crate::utils::helpers::{escape_html, path_segments};

/// Key of the page heading: `{first segment}.heading`, or `common.title` on `/`
pub fn heading_key(root_path: &str) -> String {
    match path_segments(root_path).first() {
        Some(page) => format!("{}.heading", page),
        None => "common.title".to_string(),
    }
}

/// Render the page for the current request
pub async fn render_page(State(app): State<Arc<AppContext>>, i18n: RequestI18n) -> Response {
    let hydration = match HydrationPayload::from_request(&i18n).to_script_tag() {
        Ok(tag) => tag,
        Err(e) => {
            error!(error = %e, "Failed to serialize hydration payload");
            String::new()
        }
    };

    let links: Vec<String> = app
        .resolver
        .supported_locales()
        .iter()
        .filter_map(|locale| {
            let href = switch_locale_path(&i18n.root_path, locale, app.resolver.supported_locales())?;
            Some(format!(
                r#"<a href="{}" hreflang="{}">{}</a>"#,
                escape_html(&href),
                locale,
                locale
            ))
        })
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>{links}</nav>
<h1>{heading}</h1>
<a href="{home}">{home_label}</a>
{hydration}
</body>
</html>
"#,
        lang = escape_html(&i18n.locale),
        title = escape_html(&i18n.t("metadata.title")),
        links = links.join(" "),
        heading = escape_html(&i18n.t(&heading_key(&i18n.root_path))),
        home = escape_html(&i18n.href("/")),
        home_label = escape_html(&i18n.t("common.home")),
        hydration = hydration,
    );

    Html(html).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_key() {
        assert_eq!(heading_key("/"), "common.title");
        assert_eq!(heading_key("/about/team"), "about.heading");
    }
}
