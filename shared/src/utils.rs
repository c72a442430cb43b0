//! # Shared Utility Functions
//!
//! Display helpers used by the client when rendering API data.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shared::utils::short_date_label;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 10, 4).unwrap();
//! assert_eq!(short_date_label(date), "10-04");
//! ```

use chrono::NaiveDate;

/// Month-day portion of a date (`MM-DD`), used as a chart axis label.
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// Truncate text to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split mid-char.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
