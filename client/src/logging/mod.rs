//! # Logging
//!
//! File-based structured logging for the MoodEcho client.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `moodecho=debug,info`)
//! - `MOODECHO_LOG_DIR`: Log directory (default: `logs`)
//! - `MOODECHO_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
