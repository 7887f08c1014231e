//! Mock translation server for testing
//!
//! Serves `/{locale}/{namespace}.json` with wiremock so the HTTP source can
//! be exercised without a real CDN.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock HTTP translation server
pub struct TranslationMockServer {
    pub server: MockServer,
}

impl TranslationMockServer {
    pub async fn new() -> Self {
        super::init_test_logging();
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure as `translations_base`
    pub fn base_url(&self) -> String {
        format!("{}/locales", self.server.uri())
    }

    /// Serve `body` for `locale`/`namespace`
    pub async fn mock_namespace(&self, locale: &str, namespace: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/locales/{}/{}.json", locale, namespace)))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer `locale`/`namespace` with an error status
    pub async fn mock_status(&self, locale: &str, namespace: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/locales/{}/{}.json", locale, namespace)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` and require exactly `times` requests for it
    pub async fn expect_namespace(&self, locale: &str, namespace: &str, body: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/locales/{}/{}.json", locale, namespace)))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }
}
