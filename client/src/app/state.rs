//! # Application State Types
//!
//! All state-related types for the application: screens, authentication
//! forms, the journal draft and the dashboard view state.

use crate::app::derive::{ChartGate, DashboardView};
use crate::app::store::{EntryStore, FetchTracker};
use shared::JournalEntry;

/// Shown when login fails for any reason
pub const MSG_LOGIN_FAILED: &str = "Invalid username or password";
/// Shown when a login or register form is submitted with a blank field
pub const MSG_CREDENTIALS_REQUIRED: &str = "Username and password required";
/// Shown when registration fails for any reason
pub const MSG_REGISTER_FAILED: &str = "Registration failed. Username might be taken.";
/// Shown on the login screen after a successful registration
pub const MSG_REGISTER_OK: &str = "Registration successful! Please login.";
/// Shown when a blank journal is submitted
pub const MSG_EMPTY_JOURNAL: &str = "Please write something!";
/// Shown when create or update fails
pub const MSG_SAVE_FAILED: &str = "Something went wrong.";
/// Shown when delete fails
pub const MSG_DELETE_FAILED: &str = "Failed to delete entry";
/// Shown when the entry list cannot be loaded
pub const MSG_FETCH_FAILED: &str = "Failed to load entries.";
/// Confirmation prompt before a delete
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this entry?";

/// Terminal width from which input and history are shown side by side
pub const DESKTOP_MIN_COLUMNS: u16 = 100;

/// Application screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in form
    #[default]
    Login,
    /// Account creation form
    Register,
    /// Journal input, history and mood chart
    Dashboard,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Welcome Back",
            Screen::Register => "Join MoodEcho",
            Screen::Dashboard => "MoodEcho",
        }
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Login form
    Login {
        username: String,
        password: String,
        error: Option<String>,
        /// Informational message carried over from registration
        notice: Option<String>,
        loading: bool,
    },
    /// Registration form
    Register {
        username: String,
        password: String,
        error: Option<String>,
        loading: bool,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            username: String::new(),
            password: String::new(),
            error: None,
            notice: None,
            loading: false,
        }
    }

    pub fn register() -> Self {
        AuthState::Register {
            username: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::Login { error, .. } | AuthState::Register { error, .. } => error.as_deref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            AuthState::Login { loading, .. } | AuthState::Register { loading, .. } => *loading,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::login()
    }
}

/// The single in-progress, unsaved journal entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    /// Selected habit names; each appears at most once, in selection order
    pub habits: Vec<String>,
    /// Set when the draft edits an existing entry
    pub edit_id: Option<i64>,
}

impl Draft {
    /// Select `habit` if unselected, otherwise unselect it
    pub fn toggle_habit(&mut self, habit: &str) {
        if let Some(pos) = self.habits.iter().position(|h| h == habit) {
            self.habits.remove(pos);
        } else {
            self.habits.push(habit.to_string());
        }
    }

    pub fn is_selected(&self, habit: &str) -> bool {
        self.habits.iter().any(|h| h == habit)
    }

    /// Overwrite the draft with an existing entry's content and habits
    pub fn seed_from(&mut self, entry: &JournalEntry) {
        self.text = entry.journal_content.clone();
        self.habits.clear();
        for name in entry.habit_names() {
            if !self.is_selected(&name) {
                self.habits.push(name);
            }
        }
        self.edit_id = Some(entry.id);
    }

    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    /// True if there is no non-whitespace journal text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Where the draft is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Nothing typed, nothing being edited
    Idle,
    /// Composing a new entry
    Creating,
    /// Editing entry `id`
    Editing(i64),
    /// Create or update in flight
    Submitting,
}

/// Dashboard section shown in the tabbed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    /// Journal editor and habit toggles
    Input,
    /// Mood chart and past entries
    History,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[DashboardTab::Input, DashboardTab::History]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Input => "Journal",
            DashboardTab::History => "Insights",
        }
    }
}

/// Dashboard arrangement chosen from the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Input and history side by side
    Split,
    /// One section at a time with a tab bar
    Tabbed,
}

impl Layout {
    pub fn for_width(columns: u16) -> Self {
        if columns >= DESKTOP_MIN_COLUMNS {
            Layout::Split
        } else {
            Layout::Tabbed
        }
    }
}

/// Dashboard view state
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub draft: Draft,
    /// Create/update in flight; disables the submit control
    pub loading: bool,
    pub active_tab: DashboardTab,
    pub layout: Layout,
    /// Entry awaiting delete confirmation
    pub pending_delete: Option<i64>,
    /// Confirmed delete in flight
    pub deleting: Option<i64>,
    /// Last user-facing error or notice
    pub alert: Option<String>,
    pub chart_gate: ChartGate,
    /// Derived values, recomputed on every entry store change
    pub view: DashboardView,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            draft: Draft::default(),
            loading: false,
            active_tab: DashboardTab::Input,
            layout: Layout::Tabbed,
            pending_delete: None,
            deleting: None,
            alert: None,
            chart_gate: ChartGate::default(),
            view: DashboardView::default(),
        }
    }
}

impl DashboardState {
    pub fn phase(&self) -> DraftPhase {
        if self.loading {
            DraftPhase::Submitting
        } else if let Some(id) = self.draft.edit_id {
            DraftPhase::Editing(id)
        } else if !self.draft.text.is_empty() || !self.draft.habits.is_empty() {
            DraftPhase::Creating
        } else {
            DraftPhase::Idle
        }
    }

    /// Label of the submit control
    pub fn submit_label(&self) -> &'static str {
        match self.phase() {
            DraftPhase::Submitting => "AI Analyzing...",
            DraftPhase::Editing(_) => "Update Entry",
            DraftPhase::Idle | DraftPhase::Creating => "Check In",
        }
    }

    /// Whether the submit control accepts input. Advisory only.
    pub fn submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn shows_input(&self) -> bool {
        self.layout == Layout::Split || self.active_tab == DashboardTab::Input
    }

    pub fn shows_history(&self) -> bool {
        self.layout == Layout::Split || self.active_tab == DashboardTab::History
    }
}

/// Whole-application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub entries: EntryStore,
    /// Entry list fetches, kept across logout so late responses stay ordered
    pub fetches: FetchTracker,
}

impl AppState {
    /// Check if a screen can only be shown with a session token
    pub fn requires_auth(screen: Screen) -> bool {
        matches!(screen, Screen::Dashboard)
    }

    /// Entry with `id` from the store
    pub fn entry(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.get(id)
    }

    /// True while any request started by a user action has not been answered
    pub fn is_busy(&self) -> bool {
        self.auth.is_loading()
            || self.dashboard.loading
            || self.fetches.is_syncing()
            || self.dashboard.deleting.is_some()
    }
}
