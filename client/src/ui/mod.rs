//! # Text Rendering
//!
//! Renders the current screen to plain text. The renderer only reads state;
//! the one signal it sends back is the chart container being laid out.

pub mod screens;
pub mod widgets;

use crate::app::{App, Screen};

/// Horizontal rule width for a given layout width
pub(crate) fn rule(columns: usize) -> String {
    "─".repeat(columns.max(20))
}

/// Render the screen the session guard currently allows
pub fn render(app: &mut App, columns: u16) -> String {
    app.handle_resize(columns);
    let screen = app.visible_screen();

    if screen == Screen::Dashboard && app.state.read().dashboard.shows_history() {
        app.handle_chart_ready();
    }

    // Lock released before returning
    let state = app.state.read();
    match screen {
        Screen::Login | Screen::Register => screens::auth::render(&state, screen, columns),
        Screen::Dashboard => screens::dashboard::render(&state, columns),
    }
}
