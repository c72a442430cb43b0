//! # Application Orchestrator
//!
//! The [`App`] struct coordinates user actions, background API tasks and the
//! shared application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      UI side                                │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  │  - on_tick() / next_event() - apply task results     │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - EntryStore ──StoreChange──► DashboardView         │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │                  Tokio tasks                                │
//! │  - login / register                                         │
//! │  - fetch_entries / save_entry / delete_entry                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks only talk to the [`ApiService`] and send an [`AppEvent`] back; state
//! is changed exclusively on the UI side. Locks are held briefly and never
//! across an await point.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use moodecho::app::{App, Screen};
//! use moodecho::config::ClientConfig;
//!
//! # async fn run() -> moodecho::core::Result<()> {
//! let mut app = App::from_config(&ClientConfig::from_env())?;
//! app.start();
//! app.handle_login_click("alice".into(), "secret".into());
//! app.settle().await;
//!
//! let state = app.state.read();
//! assert_eq!(state.current_screen, Screen::Dashboard);
//! # Ok(())
//! # }
//! ```

pub mod derive;
pub mod guard;
pub mod session;
pub mod state;
pub mod store;

mod event_handler;
mod events;
mod handlers;
mod tasks;

pub use events::AppEvent;
pub use guard::{Access, SessionGuard};
pub use session::{FileTokenStore, Session, TokenStore};
pub use state::*;
pub use store::{EntryStore, FetchTracker, StoreChange};

use crate::app::derive::DashboardView;
use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Use `read()` for rendering and release the guard before calling any
    /// handler.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task
    event_tx: Sender<AppEvent>,

    api: Arc<dyn ApiService>,
    session: Session,
    guard: SessionGuard,

    /// Entry store change notifications
    store_rx: Receiver<StoreChange>,
}

impl App {
    /// Create an application around an API service and the session it uses.
    ///
    /// `session` must be the same context the API service reads its token
    /// from. No task is spawned until [`App::start`] or a handler is called.
    pub fn new(api: Arc<dyn ApiService>, session: Session) -> Self {
        let mut state = AppState::default();
        let store_rx = state.entries.subscribe();
        let guard = SessionGuard::new(session.clone());
        let (event_tx, event_rx) = unbounded();

        tracing::info!(authenticated = session.is_authenticated(), "App state initialized");

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            api,
            session,
            guard,
            store_rx,
        }
    }

    /// Build the production wiring: file-backed session and HTTP client
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let store = Arc::new(FileTokenStore::new(&config.session_file));
        let session = Session::with_store(store)?;
        let api = Arc::new(ApiClient::from_config(config, session.clone()));

        let app = Self::new(api, session);
        app.state.write().dashboard.layout = Layout::for_width(config.columns);
        Ok(app)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Enter the root route: the dashboard, or login without a session
    pub fn start(&mut self) -> Access {
        self.navigate(Screen::Dashboard)
    }

    /// Navigate through the session guard
    pub fn navigate(&mut self, screen: Screen) -> Access {
        handlers::navigation::handle_screen_change(
            self.state.clone(),
            &self.guard,
            self.api.clone(),
            self.event_tx.clone(),
            screen,
        )
    }

    /// Screen to render now.
    ///
    /// The guard is re-evaluated on every call, so a session cleared behind
    /// the app's back still lands on login.
    pub fn visible_screen(&self) -> Screen {
        let current = self.state.read().current_screen;
        self.guard.resolve(current).screen()
    }

    /// Apply every pending task result without blocking
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.refresh_view();
    }

    /// Wait for the next task result and apply it.
    ///
    /// Returns `false` if the channel is closed.
    pub async fn next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply task results until no request started by this app is pending
    pub async fn settle(&mut self) {
        while self.state.read().is_busy() {
            if !self.next_event().await {
                break;
            }
        }
        self.refresh_view();
    }

    /// Recompute the dashboard view if the entry store changed
    fn refresh_view(&mut self) {
        let mut latest = None;
        while let Ok(change) = self.store_rx.try_recv() {
            tracing::trace!(?change, "Entry store change received");
            latest = Some(change.revision());
        }
        let Some(latest) = latest else {
            return;
        };

        let mut state = self.state.write();
        let view = DashboardView::compute(state.entries.entries(), state.entries.revision());
        debug_assert!(view.revision >= latest);
        tracing::debug!(
            revision = view.revision,
            entries = view.entry_count,
            average = view.average_mood,
            "Dashboard view recomputed"
        );
        state.dashboard.view = view;
    }

    // Authentication

    pub fn handle_login_click(&mut self, username: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            username,
            password,
        );
    }

    pub fn handle_register_click(&mut self, username: String, password: String) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            username,
            password,
        );
    }

    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_register(&mut self) {
        handlers::auth::handle_switch_to_register(self.state.clone());
    }

    pub fn handle_logout(&mut self) {
        handlers::navigation::handle_logout(self.state.clone(), &self.session);
        self.refresh_view();
    }

    // Dashboard

    pub fn handle_text_change(&mut self, text: impl Into<String>) {
        handlers::dashboard::handle_text_change(self.state.clone(), text.into());
    }

    pub fn handle_habit_toggle(&mut self, habit: &str) {
        handlers::dashboard::handle_habit_toggle(self.state.clone(), habit);
    }

    /// Submit the draft; fails with a validation error when it is blank
    pub fn handle_submit(&mut self) -> Result<()> {
        handlers::dashboard::handle_submit(self.state.clone(), self.api.clone(), self.event_tx.clone())
    }

    pub fn handle_start_edit(&mut self, id: i64) -> Result<()> {
        handlers::dashboard::handle_start_edit(self.state.clone(), id)
    }

    pub fn handle_cancel_edit(&mut self) {
        handlers::dashboard::handle_cancel_edit(self.state.clone());
    }

    pub fn handle_request_delete(&mut self, id: i64) {
        handlers::dashboard::handle_request_delete(self.state.clone(), id);
    }

    pub fn handle_confirm_delete(&mut self) -> Option<i64> {
        handlers::dashboard::handle_confirm_delete(self.state.clone(), self.api.clone(), self.event_tx.clone())
    }

    pub fn handle_dismiss_delete(&mut self) {
        handlers::dashboard::handle_dismiss_delete(self.state.clone());
    }

    pub fn handle_tab_change(&mut self, tab: DashboardTab) {
        handlers::dashboard::handle_tab_change(self.state.clone(), tab);
    }

    pub fn handle_resize(&mut self, columns: u16) {
        handlers::dashboard::handle_resize(self.state.clone(), columns);
    }

    /// Signal from the renderer that the chart container is laid out
    pub fn handle_chart_ready(&mut self) {
        handlers::dashboard::handle_chart_ready(self.state.clone());
    }

    pub fn handle_dismiss_alert(&mut self) {
        handlers::dashboard::handle_dismiss_alert(self.state.clone());
    }
}
