//! HTTP handlers module
//!
//! Page handlers and the router that wires them behind the i18n and
//! request-logging middleware.

pub mod pages;

use std::sync::Arc;
use axum::{middleware, routing::get, Router};

use crate::middleware::{i18n_middleware, request_logging_middleware};
use crate::state::AppContext;

pub use pages::render_page;

/// Build the application router
///
/// Every path is rendered by [`render_page`]; the i18n middleware runs
/// first and request logging wraps everything.
pub fn build_router(app: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(render_page))
        .route("/{*path}", get(render_page))
        .layer(middleware::from_fn_with_state(app.clone(), i18n_middleware))
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(app)
}
