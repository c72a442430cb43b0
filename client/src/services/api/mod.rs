//! # Journal API Client Module
//!
//! HTTP client for communicating with the MoodEcho journal API.
//! Handles authentication and journal entry CRUD.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, auth header and error body handling
//! ├── auth.rs     - Authentication endpoints (login, register)
//! └── entries.rs  - Entry endpoints (list, create, update, delete)
//! ```

pub mod auth;
pub mod client;
pub mod entries;

pub use client::ApiClient;
