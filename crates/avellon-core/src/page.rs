//! Page identifiers for every navigable view

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Enumerated identifier for a navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    // Public
    #[default]
    Home,
    Platform,
    Solutions,
    Services,
    Insights,
    About,
    Contact,
    Login,

    // Secure console
    WarRoom,
    Analytics,
    Simulation,
    SystemLogs,
}

/// Pages listed in the public sidebar menu, in display order.
///
/// `Login` is public but reached through its own affordance, not the menu.
pub const PUBLIC_MENU: [PageId; 7] = [
    PageId::Home,
    PageId::Platform,
    PageId::Solutions,
    PageId::Services,
    PageId::Insights,
    PageId::About,
    PageId::Contact,
];

/// Pages listed in the secure console menu, in display order.
pub const SECURE_MENU: [PageId; 4] = [
    PageId::WarRoom,
    PageId::Analytics,
    PageId::Simulation,
    PageId::SystemLogs,
];

/// Every page, public first.
pub const ALL_PAGES: [PageId; 12] = [
    PageId::Home,
    PageId::Platform,
    PageId::Solutions,
    PageId::Services,
    PageId::Insights,
    PageId::About,
    PageId::Contact,
    PageId::Login,
    PageId::WarRoom,
    PageId::Analytics,
    PageId::Simulation,
    PageId::SystemLogs,
];

impl PageId {
    /// Whether the page requires an authenticated session.
    pub fn is_secure(&self) -> bool {
        matches!(
            self,
            PageId::WarRoom | PageId::Analytics | PageId::Simulation | PageId::SystemLogs
        )
    }

    /// Human-readable label used in menus and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Platform => "Platform",
            PageId::Solutions => "Solutions",
            PageId::Services => "Services",
            PageId::Insights => "Insights",
            PageId::About => "About",
            PageId::Contact => "Contact",
            PageId::Login => "Login",
            PageId::WarRoom => "War Room",
            PageId::Analytics => "Analytics",
            PageId::Simulation => "Simulation",
            PageId::SystemLogs => "System Logs",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase and drop separators so "War Room", "war_room" and "WAR-ROOM" agree.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ALL_PAGES
            .iter()
            .copied()
            .find(|page| normalize(page.label()) == wanted)
            .ok_or_else(|| Error::routing(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_pages() {
        for page in SECURE_MENU {
            assert!(page.is_secure(), "{page} should be secure");
        }
        for page in PUBLIC_MENU {
            assert!(!page.is_secure(), "{page} should be public");
        }
        assert!(!PageId::Login.is_secure());
    }

    #[test]
    fn test_labels_parse_back() {
        for page in ALL_PAGES {
            assert_eq!(page.label().parse::<PageId>().unwrap(), page);
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_separators() {
        assert_eq!("war_room".parse::<PageId>().unwrap(), PageId::WarRoom);
        assert_eq!("SYSTEM-LOGS".parse::<PageId>().unwrap(), PageId::SystemLogs);
        assert_eq!("  contact ".trim().parse::<PageId>().unwrap(), PageId::Contact);
    }

    #[test]
    fn test_unknown_page_is_routing_error() {
        let err = "Bridge".parse::<PageId>().unwrap_err();
        assert!(matches!(err, Error::Routing { ref name } if name == "Bridge"));
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }
}
