//! # Dashboard Screen
//!
//! Header with the average mood and streaks, then the input and history
//! sections. In the tabbed layout only the active section is rendered.

use crate::app::derive::{format_average, history, HABIT_VOCABULARY};
use crate::app::{AppState, DashboardTab, Layout, Screen, MSG_CONFIRM_DELETE};
use crate::ui::rule;
use crate::ui::widgets::{cards, chart};
use std::fmt::Write;

pub fn render(state: &AppState, columns: u16) -> String {
    let dashboard = &state.dashboard;
    let view = &dashboard.view;
    let width = usize::from(columns);
    let mut out = String::new();

    let _ = writeln!(out, "{}   Avg Mood: {}", Screen::Dashboard.title(), format_average(view.average_mood));
    let _ = writeln!(out, "{}", cards::streak_line(&view.streaks));
    let _ = writeln!(out, "{}", rule(width));

    if let Some(alert) = &dashboard.alert {
        let _ = writeln!(out, "! {}", alert);
    }
    if let Some(id) = dashboard.pending_delete {
        let _ = writeln!(out, "? {} (#{})", MSG_CONFIRM_DELETE, id);
    }
    if state.fetches.is_syncing() {
        let _ = writeln!(out, "Syncing entries...");
    }

    if dashboard.layout == Layout::Tabbed {
        let tabs: Vec<String> = DashboardTab::all()
            .iter()
            .map(|tab| {
                if *tab == dashboard.active_tab {
                    format!("[{}]", tab.title())
                } else {
                    format!(" {} ", tab.title())
                }
            })
            .collect();
        let _ = writeln!(out, "{}", tabs.join(" "));
    }

    if dashboard.shows_input() {
        out.push_str(&render_input(state));
        let _ = writeln!(out, "{}", rule(width));
    }
    if dashboard.shows_history() {
        out.push_str(&render_history(state, width));
    }
    out
}

fn render_input(state: &AppState) -> String {
    let dashboard = &state.dashboard;
    let draft = &dashboard.draft;
    let mut out = String::new();

    match draft.edit_id {
        Some(id) => {
            let _ = writeln!(out, "Editing entry #{}", id);
        }
        None => {
            let _ = writeln!(out, "How are you feeling today?");
        }
    }
    let text = if draft.text.is_empty() { "..." } else { draft.text.as_str() };
    let _ = writeln!(out, "  {}", text);

    let toggles: Vec<String> = HABIT_VOCABULARY
        .iter()
        .map(|habit| {
            let mark = if draft.is_selected(habit) { "x" } else { " " };
            format!("[{}] {}", mark, habit)
        })
        .collect();
    let _ = writeln!(out, "{}", toggles.join("  "));

    let button = if dashboard.submit_enabled() {
        format!("[ {} ]", dashboard.submit_label())
    } else {
        format!("( {} )", dashboard.submit_label())
    };
    let _ = writeln!(out, "{}", button);
    out
}

fn render_history(state: &AppState, width: usize) -> String {
    let dashboard = &state.dashboard;
    let view = &dashboard.view;
    let mut out = String::new();

    let _ = writeln!(out, "Mood Trend");
    out.push_str(&chart::render(&view.chart, view.chart_unlocked, &dashboard.chart_gate));

    let _ = writeln!(out, "Past Entries ({})", view.entry_count);
    if state.entries.is_empty() {
        let _ = writeln!(out, "  No entries yet.");
    }
    for entry in history(state.entries.entries()) {
        out.push_str(&cards::entry_card(entry, width));
    }
    out
}
