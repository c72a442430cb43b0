//! # Derived Views
//!
//! Pure computations over the chronologically ordered entry list: habit
//! streaks, the mood chart window, the average mood and history ordering.
//!
//! Nothing here touches the network or the renderer. [`DashboardView`] bundles
//! the results so the dashboard recomputes them once per store change.

use shared::{short_date_label, JournalEntry};

/// Habits offered as toggles in the draft editor.
///
/// These exact strings are what the API stores as habit names.
pub const HABIT_VOCABULARY: [&str; 4] = ["🏃 Run", "💧 Water", "📚 Read", "🧘 Meditate"];

/// Maximum number of points on the mood chart
pub const CHART_WINDOW: usize = 7;

/// Minimum number of entries before the mood chart is shown
pub const CHART_MIN_ENTRIES: usize = 2;

/// Match user input against the vocabulary.
///
/// Accepts the exact name (`"🏃 Run"`) or just its word, case-insensitive
/// (`"run"`).
pub fn resolve_habit(input: &str) -> Option<&'static str> {
    let input = input.trim();
    HABIT_VOCABULARY.iter().copied().find(|habit| {
        *habit == input
            || habit
                .split_whitespace()
                .last()
                .is_some_and(|word| word.eq_ignore_ascii_case(input))
    })
}

/// Consecutive most-recent entries that logged `habit_name`.
///
/// Scans newest to oldest and stops at the first entry without a matching
/// log. An entry with no logs at all is a gap.
pub fn streak(entries: &[JournalEntry], habit_name: &str) -> usize {
    entries
        .iter()
        .rev()
        .take_while(|entry| entry.has_habit(habit_name))
        .count()
}

/// One point on the mood chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    /// Month-day label, e.g. `10-14`
    pub label: String,
    pub score: i32,
}

/// The last [`CHART_WINDOW`] entries as chart points, oldest first.
pub fn chart_series(entries: &[JournalEntry]) -> Vec<ChartPoint> {
    let start = entries.len().saturating_sub(CHART_WINDOW);
    entries[start..]
        .iter()
        .map(|entry| ChartPoint {
            label: short_date_label(entry.entry_date),
            score: entry.mood_score,
        })
        .collect()
}

/// Mean mood score rounded to one decimal place; `0.0` for no entries.
pub fn average_mood(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: i64 = entries.iter().map(|entry| i64::from(entry.mood_score)).sum();
    let mean = total as f64 / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Average mood as shown in the header, always one decimal (`"8.3"`).
pub fn format_average(average: f64) -> String {
    format!("{:.1}", average)
}

/// Whether enough entries exist to draw the mood chart
pub fn chart_unlocked(entries: &[JournalEntry]) -> bool {
    entries.len() >= CHART_MIN_ENTRIES
}

/// Newest-first view for the history list
pub fn history(entries: &[JournalEntry]) -> impl Iterator<Item = &JournalEntry> {
    entries.iter().rev()
}

/// Coarse mood bucket used to colour a history card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBand {
    High,
    Medium,
    Low,
}

impl MoodBand {
    pub fn for_score(score: i32) -> Self {
        if score >= 8 {
            MoodBand::High
        } else if score >= 5 {
            MoodBand::Medium
        } else {
            MoodBand::Low
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            MoodBand::High => "+",
            MoodBand::Medium => "~",
            MoodBand::Low => "-",
        }
    }
}

/// Streak for one vocabulary habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStreak {
    pub habit: &'static str,
    pub days: usize,
}

/// Everything the dashboard derives from the entry store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    /// Store revision this view was computed from
    pub revision: u64,
    pub entry_count: usize,
    pub average_mood: f64,
    pub chart: Vec<ChartPoint>,
    pub chart_unlocked: bool,
    pub streaks: Vec<HabitStreak>,
}

impl DashboardView {
    pub fn compute(entries: &[JournalEntry], revision: u64) -> Self {
        Self {
            revision,
            entry_count: entries.len(),
            average_mood: average_mood(entries),
            chart: chart_series(entries),
            chart_unlocked: chart_unlocked(entries),
            streaks: HABIT_VOCABULARY
                .iter()
                .map(|&habit| HabitStreak {
                    habit,
                    days: streak(entries, habit),
                })
                .collect(),
        }
    }

    pub fn streak_for(&self, habit: &str) -> usize {
        self.streaks
            .iter()
            .find(|s| s.habit == habit)
            .map(|s| s.days)
            .unwrap_or(0)
    }
}

/// Holds chart rendering back until the rendering layer reports that the
/// chart container has been laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartGate {
    ready: bool,
}

impl ChartGate {
    /// Signal from the renderer that the container has a real size
    pub fn mark_container_ready(&mut self) {
        self.ready = true;
    }

    /// Container was torn down (e.g. the history tab was hidden)
    pub fn reset(&mut self) {
        self.ready = false;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Points to draw, or `None` while the container is not ready or empty
    pub fn points<'a>(&self, series: &'a [ChartPoint]) -> Option<&'a [ChartPoint]> {
        (self.ready && !series.is_empty()).then_some(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::HabitLog;

    fn entry(id: i64, day: u32, mood: i32, habits: &[&str]) -> JournalEntry {
        JournalEntry {
            id,
            entry_date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
            journal_content: String::new(),
            mood_score: mood,
            ai_summary: String::new(),
            habit_logs: habits
                .iter()
                .enumerate()
                .map(|(i, name)| HabitLog {
                    id: format!("{}-{}", id, i),
                    habit_name: name.to_string(),
                    completed: true,
                })
                .collect(),
        }
    }

    const RUN: &str = "🏃 Run";
    const READ: &str = "📚 Read";

    #[test]
    fn test_streak_counts_trailing_run() {
        let entries = vec![
            entry(1, 1, 5, &[RUN]),
            entry(2, 2, 5, &[]),
            entry(3, 3, 5, &[RUN, READ]),
            entry(4, 4, 5, &[RUN]),
        ];
        assert_eq!(streak(&entries, RUN), 2);
        assert_eq!(streak(&entries, READ), 0);
    }

    #[test]
    fn test_streak_zero_when_latest_misses() {
        let entries = vec![entry(1, 1, 5, &[RUN]), entry(2, 2, 5, &[RUN]), entry(3, 3, 5, &[READ])];
        assert_eq!(streak(&entries, RUN), 0);
        assert_eq!(streak(&entries, READ), 1);
    }

    #[test]
    fn test_streak_empty_store() {
        for habit in HABIT_VOCABULARY {
            assert_eq!(streak(&[], habit), 0);
        }
    }

    #[test]
    fn test_streak_ignores_completed_flag() {
        let mut logged = entry(1, 1, 5, &[RUN]);
        logged.habit_logs[0].completed = false;
        assert_eq!(streak(&[logged], RUN), 1);
    }

    #[test]
    fn test_resolve_habit() {
        assert_eq!(resolve_habit("🏃 Run"), Some(RUN));
        assert_eq!(resolve_habit("read"), Some(READ));
        assert_eq!(resolve_habit(" Meditate "), Some("🧘 Meditate"));
        assert_eq!(resolve_habit("swim"), None);
    }

    #[test]
    fn test_chart_series_window() {
        let entries: Vec<_> = (1..=10).map(|d| entry(d as i64, d, d as i32, &[])).collect();

        let series = chart_series(&entries);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0], ChartPoint { label: "04-04".to_string(), score: 4 });
        assert_eq!(series[6].label, "04-10");

        assert_eq!(chart_series(&entries[..3]).len(), 3);
        assert!(chart_series(&[]).is_empty());
    }

    #[test]
    fn test_average_mood() {
        assert_eq!(average_mood(&[]), 0.0);
        assert_eq!(average_mood(&[entry(1, 1, 4, &[]), entry(2, 2, 6, &[])]), 5.0);
        assert_eq!(
            average_mood(&[entry(1, 1, 7, &[]), entry(2, 2, 8, &[]), entry(3, 3, 10, &[])]),
            8.3
        );
        assert_eq!(format_average(0.0), "0.0");
        assert_eq!(format_average(9.0), "9.0");
    }

    #[test]
    fn test_mood_band_thresholds() {
        assert_eq!(MoodBand::for_score(10), MoodBand::High);
        assert_eq!(MoodBand::for_score(8), MoodBand::High);
        assert_eq!(MoodBand::for_score(7), MoodBand::Medium);
        assert_eq!(MoodBand::for_score(5), MoodBand::Medium);
        assert_eq!(MoodBand::for_score(4), MoodBand::Low);
    }

    #[test]
    fn test_history_newest_first() {
        let entries = vec![entry(1, 1, 5, &[]), entry(2, 2, 5, &[]), entry(3, 3, 5, &[])];
        let ids: Vec<i64> = history(&entries).map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_dashboard_view_compute() {
        let entries = vec![entry(1, 1, 6, &[RUN]), entry(2, 2, 9, &[RUN, READ])];
        let view = DashboardView::compute(&entries, 5);
        assert_eq!(view.revision, 5);
        assert_eq!(view.entry_count, 2);
        assert_eq!(view.average_mood, 7.5);
        assert!(view.chart_unlocked);
        assert_eq!(view.streak_for(RUN), 2);
        assert_eq!(view.streak_for(READ), 1);
        assert_eq!(view.streak_for("💧 Water"), 0);
        assert_eq!(view.streaks.len(), HABIT_VOCABULARY.len());

        let single = DashboardView::compute(&entries[..1], 6);
        assert!(!single.chart_unlocked);
    }

    #[test]
    fn test_chart_gate() {
        let series = vec![ChartPoint { label: "01-01".to_string(), score: 5 }];
        let mut gate = ChartGate::default();
        assert!(gate.points(&series).is_none());

        gate.mark_container_ready();
        assert_eq!(gate.points(&series).map(|p| p.len()), Some(1));
        assert!(gate.points(&[]).is_none());

        gate.reset();
        assert!(!gate.is_ready());
    }
}
