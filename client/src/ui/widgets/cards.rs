//! History cards and streak badges

use crate::app::derive::{HabitStreak, MoodBand};
use shared::{truncate_text, JournalEntry};
use std::fmt::Write;

/// One history card: date, mood with band marker, summary, habits and content
pub fn entry_card(entry: &JournalEntry, width: usize) -> String {
    let band = MoodBand::for_score(entry.mood_score);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "#{} {}  mood {}/10 {}",
        entry.id,
        entry.entry_date.format("%Y-%m-%d"),
        entry.mood_score,
        band.marker()
    );
    if !entry.ai_summary.is_empty() {
        let _ = writeln!(out, "  \"{}\"", truncate_text(&entry.ai_summary, width.saturating_sub(4)));
    }
    let habits = entry.habit_names();
    if !habits.is_empty() {
        let _ = writeln!(out, "  {}", habits.join("  "));
    }
    let _ = writeln!(out, "  {}", truncate_text(&entry.journal_content, width.saturating_sub(2)));
    out
}

/// Streak badges, e.g. `🏃 Run 3d`
pub fn streak_line(streaks: &[HabitStreak]) -> String {
    streaks
        .iter()
        .map(|s| format!("{} {}d", s.habit, s.days))
        .collect::<Vec<_>>()
        .join("   ")
}
