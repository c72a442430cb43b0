//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the MoodEcho client and the journal API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and error DTOs
//!   - **[`dto::journal`]**: Journal entries, habit logs and entry payloads
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::short_date_label`]**: Month-day label used on chart axes
//!
//! ## Wire Format
//!
//! The journal API speaks camelCase JSON for entries (`entryDate`, `moodScore`,
//! `habitLogs`, ...) and plain lowercase keys for auth payloads:
//! - Entry types use `#[serde(rename_all = "camelCase")]`
//! - Optional or nullable fields default instead of failing the whole response
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, TokenResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: TokenResponse = reqwest::Client::new()
//!     .post("http://localhost:8080/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
