//! Middleware module
//!
//! This module contains middleware for request processing

pub mod i18n;
pub mod logging;

// Re-export commonly used middleware
pub use i18n::i18n_middleware;
pub use logging::request_logging_middleware;
