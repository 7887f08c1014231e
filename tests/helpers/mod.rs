//! Test helpers module
//!
//! Utilities shared by the integration tests: logging setup, on-disk
//! translation fixtures and a mock HTTP translation server.

#![allow(dead_code)]

pub mod translation_fixture;
pub mod translation_mock;

pub use translation_fixture::*;
pub use translation_mock::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("route_i18n=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Supported locales used across the test suite
pub fn test_locales() -> Vec<String> {
    vec!["en".to_string(), "ja".to_string(), "fr".to_string()]
}
