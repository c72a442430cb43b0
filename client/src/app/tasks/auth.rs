//! # Authentication Tasks

use super::spawn_tracked;
use crate::app::events::AppEvent;
use crate::core::service::ApiService;
use async_channel::Sender;
use std::sync::Arc;

/// Log in and report the token
pub(crate) fn login(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, username: String, password: String) {
    spawn_tracked("login", async move {
        let result = api.login(username, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Register a new account
pub(crate) fn register(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, username: String, password: String) {
    spawn_tracked("register", async move {
        let result = api.register(username, password).await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}
