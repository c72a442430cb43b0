//! # Entry Endpoints
//!
//! Journal entry CRUD. Every call carries the session token.

use super::client::{ensure_success, ApiClient};
use crate::core::error::{AppError, Result};
use shared::{EntryRequest, JournalEntry};

/// Fetch every entry owned by the session's user.
#[tracing::instrument(skip(client))]
pub async fn list_entries(client: &ApiClient) -> Result<Vec<JournalEntry>> {
    let start = std::time::Instant::now();

    let response = client
        .authorized(client.client.get(client.url("/entries")))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "List entries network error");
            AppError::Network(e.to_string())
        })?;

    let entries = ensure_success(response)
        .await?
        .json::<Vec<JournalEntry>>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse entries: {}", e)))?;

    tracing::debug!(
        count = entries.len(),
        duration_ms = start.elapsed().as_millis(),
        "Entries fetched"
    );
    Ok(entries)
}

/// Submit a new entry.
#[tracing::instrument(skip(client, content), fields(habits = habit_names.len()))]
pub async fn create_entry(
    client: &ApiClient,
    content: String,
    habit_names: Vec<String>,
) -> Result<JournalEntry> {
    let request = EntryRequest {
        journal: content,
        habits: habit_names,
    };

    let response = client
        .authorized(client.client.post(client.url("/entries")))
        .json(&request)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let entry = ensure_success(response)
        .await?
        .json::<JournalEntry>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse entry: {}", e)))?;

    tracing::info!(id = entry.id, mood = entry.mood_score, "Entry created");
    Ok(entry)
}

/// Replace the content and habits of entry `id`.
#[tracing::instrument(skip(client, content), fields(habits = habit_names.len()))]
pub async fn update_entry(
    client: &ApiClient,
    id: i64,
    content: String,
    habit_names: Vec<String>,
) -> Result<JournalEntry> {
    let request = EntryRequest {
        journal: content,
        habits: habit_names,
    };

    let response = client
        .authorized(client.client.put(client.url(&format!("/entries/{}", id))))
        .json(&request)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let entry = ensure_success(response)
        .await?
        .json::<JournalEntry>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse entry: {}", e)))?;

    tracing::info!(id = entry.id, mood = entry.mood_score, "Entry updated");
    Ok(entry)
}

/// Delete entry `id`.
#[tracing::instrument(skip(client))]
pub async fn delete_entry(client: &ApiClient, id: i64) -> Result<()> {
    let response = client
        .authorized(client.client.delete(client.url(&format!("/entries/{}", id))))
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    ensure_success(response).await?;
    tracing::info!("Entry deleted");
    Ok(())
}
