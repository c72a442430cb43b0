//! # Entry Tasks
//!
//! Fetch, save and delete journal entries.

use super::spawn_tracked;
use crate::app::events::AppEvent;
use crate::core::service::ApiService;
use async_channel::Sender;
use std::sync::Arc;

/// Fetch the full entry list; `generation` comes from the state's fetch tracker
pub(crate) fn fetch_entries(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, generation: u64) {
    spawn_tracked("fetch_entries", async move {
        let result = api.list_entries().await;
        let _ = event_tx.send(AppEvent::EntriesLoaded { generation, result }).await;
    });
}

/// Create or update an entry.
///
/// The follow-up fetch is issued by the event handler once the response is
/// applied, so it is numbered after every fetch the save may have raced.
pub(crate) fn save_entry(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    edit_id: Option<i64>,
    content: String,
    habit_names: Vec<String>,
) {
    spawn_tracked("save_entry", async move {
        let result = match edit_id {
            Some(id) => api.update_entry(id, content, habit_names).await,
            None => api.create_entry(content, habit_names).await,
        };
        let _ = event_tx.send(AppEvent::EntrySaved { edit_id, result }).await;
    });
}

/// Delete an entry
pub(crate) fn delete_entry(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, id: i64) {
    spawn_tracked("delete_entry", async move {
        let result = api.delete_entry(id).await;
        let _ = event_tx.send(AppEvent::EntryDeleted { id, result }).await;
    });
}
