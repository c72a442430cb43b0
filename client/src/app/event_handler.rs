//! # Event Handler
//!
//! Applies results from background tasks to application state. Every remote
//! failure is logged here and mapped to the fixed message of its screen.

use crate::app::state::{
    AuthState, DashboardTab, Screen, MSG_DELETE_FAILED, MSG_FETCH_FAILED, MSG_LOGIN_FAILED,
    MSG_REGISTER_FAILED, MSG_REGISTER_OK, MSG_SAVE_FAILED,
};
use crate::app::{tasks, App, AppEvent};
use crate::core::error::AppError;
use shared::JournalEntry;

impl App {
    /// Apply one event to state.
    ///
    /// Acquires the write lock per event, never across an await point.
    pub fn handle_event(&mut self, event: AppEvent) {
        tracing::debug!(event = event.name(), success = event.is_success(), "Handling event");

        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::RegisterResult(result) => self.handle_register_result(result),
            AppEvent::EntriesLoaded { generation, result } => self.handle_entries_loaded(generation, result),
            AppEvent::EntrySaved { edit_id, result } => self.handle_entry_saved(edit_id, result),
            AppEvent::EntryDeleted { id, result } => self.handle_entry_deleted(id, result),
        }

        self.refresh_view();
    }

    fn handle_login_result(&mut self, result: Result<String, AppError>) {
        match result {
            Ok(token) => {
                if let Err(e) = self.session.set(token) {
                    tracing::warn!(error = %e, "Session token kept in memory only");
                }
                self.state.write().auth = AuthState::login();
                tracing::info!("Login succeeded");
                self.navigate(Screen::Dashboard);
            }
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                let mut state = self.state.write();
                if let AuthState::Login { error, loading, .. } = &mut state.auth {
                    *error = Some(MSG_LOGIN_FAILED.to_string());
                    *loading = false;
                }
            }
        }
    }

    fn handle_register_result(&mut self, result: Result<(), AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                tracing::info!("Registration succeeded");
                state.auth = AuthState::Login {
                    username: String::new(),
                    password: String::new(),
                    error: None,
                    notice: Some(MSG_REGISTER_OK.to_string()),
                    loading: false,
                };
                state.current_screen = Screen::Login;
            }
            Err(e) => {
                tracing::error!(error = %e, "Registration failed");
                if let AuthState::Register { error, loading, .. } = &mut state.auth {
                    *error = Some(MSG_REGISTER_FAILED.to_string());
                    *loading = false;
                }
            }
        }
    }

    fn handle_entries_loaded(&mut self, generation: u64, result: Result<Vec<JournalEntry>, AppError>) {
        let mut state = self.state.write();
        if !state.fetches.finish(generation) {
            tracing::debug!(generation, "Discarding superseded entry fetch");
            return;
        }
        match result {
            Ok(entries) if self.session.is_authenticated() => {
                tracing::info!(count = entries.len(), "Entries loaded");
                state.entries.replace_all(entries);
            }
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "Discarding entries fetched before logout");
            }
            Err(e) => {
                tracing::error!(error = %e, remote = e.is_remote(), "Failed to fetch entries");
                state.dashboard.alert = Some(MSG_FETCH_FAILED.to_string());
            }
        }
    }

    fn handle_entry_saved(&mut self, edit_id: Option<i64>, result: Result<JournalEntry, AppError>) {
        let generation = {
            let mut state = self.state.write();
            state.dashboard.loading = false;
            match result {
                Ok(entry) => {
                    tracing::info!(id = entry.id, updated = edit_id.is_some(), mood = entry.mood_score, "Entry saved");
                    state.dashboard.draft.reset();
                    state.dashboard.active_tab = DashboardTab::History;
                    // Fetches issued before the save may predate it
                    state.fetches.invalidate();
                    self.session.is_authenticated().then(|| state.fetches.begin())
                }
                Err(e) => {
                    tracing::error!(error = %e, remote = e.is_remote(), edit_id = ?edit_id, "Failed to save entry");
                    state.dashboard.alert = Some(MSG_SAVE_FAILED.to_string());
                    None
                }
            }
        };

        if let Some(generation) = generation {
            tasks::entries::fetch_entries(self.api.clone(), self.event_tx.clone(), generation);
        }
    }

    fn handle_entry_deleted(&mut self, id: i64, result: Result<(), AppError>) {
        let mut state = self.state.write();
        if state.dashboard.deleting == Some(id) {
            state.dashboard.deleting = None;
        }
        match result {
            Ok(()) => {
                // A fetch issued before the delete could bring the entry back
                state.fetches.invalidate();
                if state.entries.remove(id).is_none() {
                    tracing::debug!(id, "Deleted entry was not held locally");
                }
                if state.dashboard.draft.edit_id == Some(id) {
                    state.dashboard.draft.reset();
                }
                tracing::info!(id, "Entry deleted");
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to delete entry");
                state.dashboard.alert = Some(MSG_DELETE_FAILED.to_string());
            }
        }
    }
}
