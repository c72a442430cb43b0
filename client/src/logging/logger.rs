//! File-based logging initialization

use super::config::{LogConfig, LOG_FILE_NAME};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily-rotated log file under `config.log_dir`
/// - Optional stderr mirror
/// - Non-blocking writes so network handlers never wait on disk
///
/// Returns the writer guard; logs are flushed when it is dropped, so the
/// caller keeps it alive for the lifetime of the program. Returns `None` when
/// the log directory cannot be created or a subscriber is already installed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("moodecho=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config
        .log_to_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        debug = config.is_debug_enabled(),
        "Logging initialized"
    );

    Some(guard)
}
