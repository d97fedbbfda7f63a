//! AVELLON console
//!
//! Binary-side glue: the headless JSON runner. The TUI lives in
//! `avellon-tui`, state and navigation in `avellon-app`.

pub mod headless;

// Re-export main entry points
pub use avellon_tui::run;
pub use headless::runner::{run_headless, HeadlessOptions};
