//! State management module
//!
//! This module holds the shared application context and the per-request
//! i18n state propagated to rendering code and to the client.

pub mod context;
pub mod hydration;

// Re-export commonly used state components
pub use context::{AppContext, RequestI18n};
pub use hydration::{HydrationPayload, HYDRATION_SCRIPT_ID};
