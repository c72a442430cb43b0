//! # Authentication Screens
//!
//! Login and registration forms.

use crate::app::{AppState, AuthState, Screen};
use crate::ui::rule;
use std::fmt::Write;

pub fn render(state: &AppState, screen: Screen, columns: u16) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", screen.title());
    let _ = writeln!(out, "{}", rule(usize::from(columns).min(48)));

    match &state.auth {
        AuthState::Login {
            username,
            notice,
            loading,
            ..
        } => {
            if let Some(notice) = notice {
                let _ = writeln!(out, "{}", notice);
            }
            let _ = writeln!(out, "Username: {}", username);
            let _ = writeln!(out, "Password: {}", "*".repeat(8));
            let label = if *loading { "Logging in..." } else { "Login" };
            let _ = writeln!(out, "[ {} ]", label);
        }
        AuthState::Register { username, loading, .. } => {
            let _ = writeln!(out, "Username: {}", username);
            let _ = writeln!(out, "Password: {}", "*".repeat(8));
            let label = if *loading { "Creating account..." } else { "Sign Up" };
            let _ = writeln!(out, "[ {} ]", label);
        }
    }

    if let Some(error) = state.auth.error() {
        let _ = writeln!(out, "! {}", error);
    }

    let hint = match screen {
        Screen::Register => "Already have an account? moodecho login",
        _ => "New here? moodecho register",
    };
    let _ = writeln!(out, "{}", hint);
    out
}
