//! Per-session navigation state

use avellon_core::{PageId, PUBLIC_MENU, SECURE_MENU};
use serde::Serialize;

/// Current page and authentication status for one console session.
///
/// `authenticated == false` with a secure `current_page` is allowed to exist
/// here; the router renders the login view in that case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionState {
    pub current_page: PageId,
    pub authenticated: bool,
    pub role: Option<String>,
    pub last_selected_public: Option<PageId>,
    pub last_selected_secure: Option<PageId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sidebar menu for the current super-state.
    pub fn menu(&self) -> &'static [PageId] {
        if self.authenticated {
            &SECURE_MENU
        } else {
            &PUBLIC_MENU
        }
    }

    /// Value currently held by the sidebar radio.
    ///
    /// The radio shows its first entry until something has been selected.
    pub fn menu_selection(&self) -> PageId {
        if self.authenticated {
            self.last_selected_secure.unwrap_or(SECURE_MENU[0])
        } else {
            self.last_selected_public.unwrap_or(PUBLIC_MENU[0])
        }
    }
}
