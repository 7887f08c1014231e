//! i18n middleware
//!
//! Resolves the locale of each request and either redirects it to its
//! locale-prefixed URL or loads its translation catalog and hands a
//! [`RequestI18n`] to the rest of the pipeline via request extensions.

use std::sync::Arc;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::locale::LocaleResolution;
use crate::state::{AppContext, RequestI18n};

/// Per-request locale resolution and catalog loading
///
/// Install with `axum::middleware::from_fn_with_state`. Translation load
/// failures only shrink the catalog; the only non-pass-through outcome is
/// the `307` redirect of the redirect policy. If the request is dropped
/// while loading, the pending loads are dropped with it and nothing is
/// published.
///
/// The same [`RequestI18n`] is attached to the response extensions for
/// outer layers such as request logging.
pub async fn i18n_middleware(
    State(app): State<Arc<AppContext>>,
    mut request: Request,
    next: Next,
) -> Response {
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let resolution = app.resolver.resolve(request.uri().path(), accept_language);

    match resolution {
        LocaleResolution::Redirect { location } => {
            let location = match request.uri().query() {
                Some(query) => format!("{}?{}", location, query),
                None => location,
            };
            Redirect::temporary(&location).into_response()
        }
        LocaleResolution::Serve { locale, root_path } => {
            let catalog = app.store.load_for_path(&locale, &root_path).await;
            let ctx = RequestI18n::new(locale, root_path, catalog);
            request.extensions_mut().insert(ctx.clone());

            let mut response = next.run(request).await;
            response.extensions_mut().insert(ctx);
            response
        }
    }
}
