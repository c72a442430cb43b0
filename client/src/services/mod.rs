//! # External Service Integrations
//!
//! - **[`api`]**: HTTP client for the MoodEcho journal API

pub mod api;

pub use api::ApiClient;
