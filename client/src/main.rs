//! # MoodEcho CLI
//!
//! Command line front end for the journal client.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use moodecho::app::App;
use moodecho::config::ClientConfig;
use moodecho::logging::{self, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(&LogConfig::from_env());

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(session_file) = cli.session_file {
        config = config.with_session_file(session_file);
    }
    tracing::debug!(api_url = %config.api_url, session_file = %config.session_file.display(), "Configuration loaded");

    let columns = config.columns;
    let mut app = App::from_config(&config)?;

    match cli.command {
        Commands::Login { username, password } => commands::auth::login(&mut app, username, password, columns).await,
        Commands::Register { username, password } => {
            commands::auth::register(&mut app, username, password, columns).await
        }
        Commands::Logout => commands::auth::logout(&mut app),
        Commands::Dashboard => commands::dashboard(&mut app, columns).await,
        Commands::Write { text, habits } => commands::entries::write(&mut app, text, habits, columns).await,
        Commands::Edit { id, text, habits } => commands::entries::edit(&mut app, id, text, habits, columns).await,
        Commands::Delete { id, yes } => commands::entries::delete(&mut app, id, yes, columns).await,
        Commands::Streaks => commands::entries::streaks(&mut app, columns).await,
    }
}
