//! # MoodEcho Client - Library Root
//!
//! Client for a personal mood and habit journal. Users sign in, check in
//! with daily journal entries tagged with completed habits, and review the
//! AI summary, mood trend and habit streaks computed from their history.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              moodecho (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! │  async-channel  - Task results and store changes       │
//! │  tracing        - Structured logging                   │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP + Bearer token
//!          ▼
//! ┌─────────────────┐
//! │  Journal API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, session and guard, entry store, derived views,
//!   screen controllers
//! - **services**: journal API client
//! - **ui**: text rendering of the screens
//! - **core**: error type and the [`core::service::ApiService`] seam
//! - **config**: environment configuration
//! - **logging**: tracing subscriber setup
//!
//! ## Event-Driven Architecture
//!
//! Handlers spawn tokio tasks that call the API and send an
//! [`app::AppEvent`] back over an async channel. The [`app::App`] applies
//! events on the UI side; entry store changes trigger a recompute of the
//! dashboard's derived values.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod ui;
