//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ApiService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use moodecho::core::service::ApiService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, session.clone()));
//!
//! // In tests: an in-memory implementation
//! let api: Arc<dyn ApiService> = Arc::new(FakeApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
