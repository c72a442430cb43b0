//! # Authentication Handlers
//!
//! Handlers for the login and registration forms.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, Screen, MSG_CREDENTIALS_REQUIRED};
use crate::app::tasks;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    username: String,
    password: String,
) {
    let blank = username.trim().is_empty() || password.is_empty();
    {
        let mut state = state.write();
        state.auth = AuthState::Login {
            username: username.clone(),
            password: password.clone(),
            error: blank.then(|| MSG_CREDENTIALS_REQUIRED.to_string()),
            notice: None,
            loading: !blank,
        };
        state.current_screen = Screen::Login;
    }
    if blank {
        return;
    }

    tracing::info!(username = %username, "Login requested");
    tasks::auth::login(api, event_tx, username, password);
}

/// Handle register button click
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    username: String,
    password: String,
) {
    let blank = username.trim().is_empty() || password.is_empty();
    {
        let mut state = state.write();
        state.auth = AuthState::Register {
            username: username.clone(),
            password: password.clone(),
            error: blank.then(|| MSG_CREDENTIALS_REQUIRED.to_string()),
            loading: !blank,
        };
        state.current_screen = Screen::Register;
    }
    if blank {
        return;
    }

    tracing::info!(username = %username, "Registration requested");
    tasks::auth::register(api, event_tx, username, password);
}

/// Switch to login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::login();
    state.current_screen = Screen::Login;
}

/// Switch to registration form
pub(crate) fn handle_switch_to_register(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::register();
    state.current_screen = Screen::Register;
}
