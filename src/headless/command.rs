//! Line commands read from stdin in headless mode

use std::str::FromStr;

use avellon_core::prelude::*;

/// One stdin line, e.g. `page War Room` or `login ana 1234`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Direct page request, like an in-page button
    Page(String),
    /// Sidebar radio selection
    Select(String),
    Login { identity: String, keycode: String },
    Logout,
    /// Re-emit the current page
    Show,
    Quit,
}

impl FromStr for HeadlessCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match (verb, rest) {
            ("page" | "p", label) if !label.is_empty() => Ok(Self::Page(label.to_string())),
            ("select" | "s", label) if !label.is_empty() => Ok(Self::Select(label.to_string())),
            ("login", args) => {
                let mut parts = args.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(identity), Some(keycode), None) => Ok(Self::Login {
                        identity: identity.to_string(),
                        keycode: keycode.to_string(),
                    }),
                    _ => Err(Error::config("usage: login <identity> <keycode>")),
                }
            }
            ("logout", "") => Ok(Self::Logout),
            ("show", "") => Ok(Self::Show),
            ("q" | "quit", "") => Ok(Self::Quit),
            _ => Err(Error::config(format!("Unknown command: {}", line))),
        }
    }
}
