//! # Application Events
//!
//! Results sent from background tasks back to the UI thread.

use crate::core::error::AppError;
use shared::JournalEntry;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed, carrying the session token on success
    LoginResult(Result<String, AppError>),
    /// Registration completed
    RegisterResult(Result<(), AppError>),
    /// Full entry list fetched by the fetch numbered `generation`
    EntriesLoaded {
        generation: u64,
        result: Result<Vec<JournalEntry>, AppError>,
    },
    /// Create (`edit_id == None`) or update completed
    EntrySaved {
        edit_id: Option<i64>,
        result: Result<JournalEntry, AppError>,
    },
    /// Delete completed
    EntryDeleted { id: i64, result: Result<(), AppError> },
}

impl AppEvent {
    /// Short name for logs; never includes payloads such as tokens
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::RegisterResult(_) => "RegisterResult",
            AppEvent::EntriesLoaded { .. } => "EntriesLoaded",
            AppEvent::EntrySaved { .. } => "EntrySaved",
            AppEvent::EntryDeleted { .. } => "EntryDeleted",
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            AppEvent::LoginResult(r) => r.is_ok(),
            AppEvent::RegisterResult(r) => r.is_ok(),
            AppEvent::EntriesLoaded { result, .. } => result.is_ok(),
            AppEvent::EntrySaved { result, .. } => result.is_ok(),
            AppEvent::EntryDeleted { result, .. } => result.is_ok(),
        }
    }
}
