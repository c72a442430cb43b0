//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::JournalEntry;

/// Trait for journal API operations
///
/// Screen controllers only ever hold an `Arc<dyn ApiService>`, so tests can
/// swap the HTTP client for an in-memory implementation.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for a session token
    async fn login(&self, username: String, password: String) -> Result<String>;

    /// Create a new account
    async fn register(&self, username: String, password: String) -> Result<()>;

    /// Fetch the full entry history of the session's owner
    async fn list_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Submit a new entry; the server assigns id, date, mood score and summary
    async fn create_entry(&self, content: String, habit_names: Vec<String>) -> Result<JournalEntry>;

    /// Replace the content and habits of an existing entry
    async fn update_entry(&self, id: i64, content: String, habit_names: Vec<String>) -> Result<JournalEntry>;

    /// Delete an entry
    async fn delete_entry(&self, id: i64) -> Result<()>;
}
