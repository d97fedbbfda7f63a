//! Headless mode - JSON event output instead of the TUI
//!
//! Events are written to stdout as NDJSON, one per line, each tagged with an
//! `"event"` field. Rendered pages carry the full page view, so scripts can
//! assert on page content without parsing ANSI output.
//!
//! ```json
//! {"event":"started","page":"home","timestamp":1704700001000}
//! {"event":"login_succeeded","role":"COMMANDER","timestamp":1704700001002}
//! {"event":"page_rendered","view":{"page":"war_room","metrics":[...]},"timestamp":1704700001003}
//! ```

pub mod command;
pub mod runner;

use std::io::{self, Write};

use avellon_app::PageView;
use avellon_core::prelude::*;
use avellon_core::PageId;
use chrono::Utc;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    Started { page: PageId, timestamp: i64 },

    /// The page the router rendered after a command
    PageRendered { view: PageView, timestamp: i64 },

    LoginSucceeded { role: String, timestamp: i64 },

    LoginRejected { message: String, timestamp: i64 },

    LoggedOut { timestamp: i64 },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Stopped { timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event to stdout as one JSON line
    pub fn emit(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_line(&mut stdout)
    }

    /// Write this event to `out` as one JSON line and flush
    pub fn write_line<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn started(page: PageId) -> Self {
        Self::Started {
            page,
            timestamp: Self::now(),
        }
    }

    pub fn page_rendered(view: PageView) -> Self {
        Self::PageRendered {
            view,
            timestamp: Self::now(),
        }
    }

    pub fn login_succeeded(role: &str) -> Self {
        Self::LoginSucceeded {
            role: role.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn login_rejected(message: &str) -> Self {
        Self::LoginRejected {
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn logged_out() -> Self {
        Self::LoggedOut {
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn stopped() -> Self {
        Self::Stopped {
            timestamp: Self::now(),
        }
    }
}
