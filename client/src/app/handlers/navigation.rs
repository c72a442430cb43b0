//! # Navigation Handlers
//!
//! Guarded screen changes and logout.

use crate::app::events::AppEvent;
use crate::app::guard::{Access, SessionGuard};
use crate::app::session::Session;
use crate::app::state::{AppState, AuthState, DashboardState, Screen};
use crate::app::tasks;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with the session guard.
///
/// Entering the dashboard starts a fresh entry fetch.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    guard: &SessionGuard,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) -> Access {
    let access = guard.resolve(screen);
    let target = access.screen();

    let generation = {
        let mut state = state.write();
        match (target, &state.auth) {
            (Screen::Login, AuthState::Register { .. }) => state.auth = AuthState::login(),
            (Screen::Register, AuthState::Login { .. }) => state.auth = AuthState::register(),
            _ => {}
        }
        state.current_screen = target;

        (target == Screen::Dashboard).then(|| state.fetches.begin())
    };

    if let Some(generation) = generation {
        tasks::entries::fetch_entries(api, event_tx, generation);
    }
    access
}

/// Drop the session and every piece of per-user state
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, session: &Session) {
    if let Err(e) = session.clear() {
        tracing::warn!(error = %e, "Failed to remove persisted session token");
    }

    let mut state = state.write();
    let layout = state.dashboard.layout;
    state.fetches.invalidate();
    state.entries.clear();
    state.dashboard = DashboardState {
        layout,
        ..DashboardState::default()
    };
    state.auth = AuthState::login();
    state.current_screen = Screen::Login;
    tracing::info!("Logged out");
}
