//! # Mood Chart
//!
//! Vertical bar chart of the recent mood scores, one column per entry.

use crate::app::derive::{ChartGate, ChartPoint};
use std::fmt::Write;

/// Hint shown until the chart has enough entries
pub const CHART_LOCKED_HINT: &str = "Add a few entries to unlock your mood chart!";

/// Top of the chart scale
const MAX_SCORE: i32 = 10;

/// Each column is as wide as a `MM-DD` label plus a gap
const COLUMN_WIDTH: usize = 6;

/// Render the chart section.
///
/// Nothing but a placeholder is drawn while the gate is closed.
pub fn render(series: &[ChartPoint], unlocked: bool, gate: &ChartGate) -> String {
    if !unlocked {
        return format!("{}\n", CHART_LOCKED_HINT);
    }
    let Some(points) = gate.points(series) else {
        return "Loading chart...\n".to_string();
    };

    let mut out = String::new();
    for level in (1..=MAX_SCORE).rev().step_by(2) {
        let _ = write!(out, "{:>2} │", level);
        for point in points {
            let cell = if point.score.clamp(0, MAX_SCORE) >= level { "██" } else { "  " };
            let _ = write!(out, "{:^width$}", cell, width = COLUMN_WIDTH);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "   └{}", "─".repeat(points.len() * COLUMN_WIDTH));
    let _ = write!(out, "    ");
    for point in points {
        let _ = write!(out, "{:^width$}", point.label, width = COLUMN_WIDTH);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<ChartPoint> {
        vec![
            ChartPoint { label: "03-01".to_string(), score: 3 },
            ChartPoint { label: "03-02".to_string(), score: 10 },
        ]
    }

    #[test]
    fn test_locked_shows_hint() {
        let mut gate = ChartGate::default();
        gate.mark_container_ready();
        assert_eq!(render(&points(), false, &gate).trim(), CHART_LOCKED_HINT);
    }

    #[test]
    fn test_waits_for_container() {
        let gate = ChartGate::default();
        assert!(!render(&points(), true, &gate).contains("03-01"));
    }

    #[test]
    fn test_draws_labels_and_bars() {
        let mut gate = ChartGate::default();
        gate.mark_container_ready();
        let text = render(&points(), true, &gate);
        assert!(text.contains("03-01"));
        assert!(text.contains("03-02"));
        let top = text.lines().next().unwrap();
        assert_eq!(top.matches("██").count(), 1);
    }
}
