//! Logging configuration from environment variables

use std::path::PathBuf;

/// Log file name inside the log directory (rotated daily)
pub const LOG_FILE_NAME: &str = "moodecho.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "moodecho=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: "moodecho=info,warn".to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("MOODECHO_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: std::env::var("MOODECHO_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Full path of the current log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
