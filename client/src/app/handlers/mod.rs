//! # Event Handlers
//!
//! User action handlers organized by screen.

pub mod auth;
pub mod dashboard;
pub mod navigation;
