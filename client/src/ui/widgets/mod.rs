//! Reusable text widgets

pub mod cards;
pub mod chart;
