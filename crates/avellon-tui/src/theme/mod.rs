//! Centralized theme for the console.
//!
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions

pub mod palette;
pub mod styles;
