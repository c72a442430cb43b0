//! # Dashboard Handlers
//!
//! Draft editing, submit, edit and delete flows, tab and layout changes.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DashboardTab, Layout, MSG_EMPTY_JOURNAL};
use crate::app::tasks;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_text_change(state: Arc<RwLock<AppState>>, text: String) {
    state.write().dashboard.draft.text = text;
}

pub(crate) fn handle_habit_toggle(state: Arc<RwLock<AppState>>, habit: &str) {
    state.write().dashboard.draft.toggle_habit(habit);
}

/// Submit the draft as a new entry, or as an update when it carries an edit id.
///
/// A blank draft is rejected before any request is made.
pub(crate) fn handle_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let (edit_id, text, habits) = {
        let mut state = state.write();
        let dashboard = &mut state.dashboard;
        if dashboard.draft.is_blank() {
            dashboard.alert = Some(MSG_EMPTY_JOURNAL.to_string());
            return Err(AppError::Validation(MSG_EMPTY_JOURNAL.to_string()));
        }
        if dashboard.loading {
            tracing::warn!("Submit while a previous submit is still in flight");
        }
        dashboard.loading = true;
        dashboard.alert = None;
        (
            dashboard.draft.edit_id,
            dashboard.draft.text.clone(),
            dashboard.draft.habits.clone(),
        )
    };

    tracing::info!(edit_id = ?edit_id, habits = habits.len(), "Submitting entry");
    tasks::entries::save_entry(api, event_tx, edit_id, text, habits);
    Ok(())
}

/// Seed the draft from a held entry and switch to the input section
pub(crate) fn handle_start_edit(state: Arc<RwLock<AppState>>, id: i64) -> Result<()> {
    let mut state = state.write();
    let entry = state
        .entry(id)
        .cloned()
        .ok_or_else(|| AppError::State(format!("No entry with id {}", id)))?;
    state.dashboard.draft.seed_from(&entry);
    state.dashboard.active_tab = DashboardTab::Input;
    tracing::debug!(id, "Editing entry");
    Ok(())
}

pub(crate) fn handle_cancel_edit(state: Arc<RwLock<AppState>>) {
    state.write().dashboard.draft.reset();
}

/// Ask for confirmation before deleting `id`
pub(crate) fn handle_request_delete(state: Arc<RwLock<AppState>>, id: i64) {
    state.write().dashboard.pending_delete = Some(id);
}

pub(crate) fn handle_dismiss_delete(state: Arc<RwLock<AppState>>) {
    state.write().dashboard.pending_delete = None;
}

/// Issue the delete awaiting confirmation. Returns the id, if one was pending.
pub(crate) fn handle_confirm_delete(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) -> Option<i64> {
    let id = {
        let mut state = state.write();
        let id = state.dashboard.pending_delete.take()?;
        state.dashboard.deleting = Some(id);
        state.dashboard.alert = None;
        id
    };

    tracing::info!(id, "Deleting entry");
    tasks::entries::delete_entry(api, event_tx, id);
    Some(id)
}

pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, tab: DashboardTab) {
    let mut state = state.write();
    let dashboard = &mut state.dashboard;
    dashboard.active_tab = tab;
    if !dashboard.shows_history() {
        dashboard.chart_gate.reset();
    }
}

/// Re-evaluate the layout for a new terminal width
pub(crate) fn handle_resize(state: Arc<RwLock<AppState>>, columns: u16) {
    let mut state = state.write();
    let dashboard = &mut state.dashboard;
    let layout = Layout::for_width(columns);
    if dashboard.layout != layout {
        tracing::debug!(columns, ?layout, "Layout changed");
        dashboard.layout = layout;
        if !dashboard.shows_history() {
            dashboard.chart_gate.reset();
        }
    }
}

pub(crate) fn handle_chart_ready(state: Arc<RwLock<AppState>>) {
    state.write().dashboard.chart_gate.mark_container_ready();
}

pub(crate) fn handle_dismiss_alert(state: Arc<RwLock<AppState>>) {
    state.write().dashboard.alert = None;
}
