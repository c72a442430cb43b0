use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moodecho")]
#[command(version)]
#[command(about = "Mood and habit journal client")]
pub struct Cli {
    /// Journal API base URL (overrides MOODECHO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session token file (overrides MOODECHO_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show mood average, streaks, chart and history
    Dashboard,

    /// Check in with a new journal entry
    Write {
        text: String,
        /// Habit completed today (repeatable), e.g. `--habit run`
        #[arg(long = "habit")]
        habits: Vec<String>,
    },

    /// Rewrite an existing entry
    Edit {
        id: i64,
        text: String,
        /// Replace the entry's habits (repeatable); omitted keeps them
        #[arg(long = "habit")]
        habits: Vec<String>,
    },

    /// Delete an entry
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current habit streaks
    Streaks,
}
