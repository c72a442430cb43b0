//! Screen renderers

pub mod auth;
pub mod dashboard;
