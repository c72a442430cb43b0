//! # Session Guard
//!
//! Decides whether a screen may be shown, from the presence of a session
//! token alone. The token is never validated here; an expired token is only
//! discovered when the next API call is rejected.

use crate::app::session::Session;
use crate::app::state::{AppState, Screen};

/// Outcome of a guarded navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Target may be shown
    Granted(Screen),
    /// Target is protected and no token is held
    Redirect(Screen),
}

impl Access {
    /// Screen that ends up displayed
    pub fn screen(&self) -> Screen {
        match *self {
            Access::Granted(screen) | Access::Redirect(screen) => screen,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted(_))
    }
}

/// Token-presence gate for protected screens
#[derive(Debug, Clone)]
pub struct SessionGuard {
    session: Session,
}

impl SessionGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// True if `target` is public or a token is present
    pub fn permits(&self, target: Screen) -> bool {
        !AppState::requires_auth(target) || self.session.is_authenticated()
    }

    /// Resolve a navigation to `target`, redirecting to login when needed
    pub fn resolve(&self, target: Screen) -> Access {
        if self.permits(target) {
            Access::Granted(target)
        } else {
            tracing::info!("Access denied: {} requires authentication, redirecting to login", target.title());
            Access::Redirect(Screen::Login)
        }
    }

    /// The entry point: the dashboard, or login without a session
    pub fn resolve_root(&self) -> Access {
        self.resolve(Screen::Dashboard)
    }
}
