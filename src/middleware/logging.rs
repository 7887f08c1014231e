//! Logging middleware
//!
//! Wraps every request in a tracing span and records its outcome and
//! latency once the response is ready.

use std::time::Instant;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, info, info_span, warn, Instrument};

use crate::state::RequestI18n;

/// Log one line per request with method, path, status and latency
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let span = info_span!("request", method = %method, path = %path);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let duration_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    let locale = response
        .extensions()
        .get::<RequestI18n>()
        .map(|ctx| ctx.locale.clone());

    let _entered = span.enter();
    if response.status().is_server_error() {
        error!(status = status, duration_ms = duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(status = status, duration_ms = duration_ms, "Request rejected");
    } else {
        info!(status = status, duration_ms = duration_ms, locale = ?locale, "Request completed");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{self, StatusCode}, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_passes_response_through() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(request_logging_middleware));

        let request = http::Request::get("/").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = http::Request::get("/missing").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
