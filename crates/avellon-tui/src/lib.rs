//! avellon-tui - Terminal UI for the AVELLON console
//!
//! This crate provides the ratatui-based display surface. It drives the TEA
//! loop from avellon-app and draws each [`PageView`](avellon_app::PageView)
//! into a sidebar + page + footer layout.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
