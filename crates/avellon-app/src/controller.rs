//! Navigation/session controller
//!
//! Owns [`SessionState`] and is the only place it is mutated. Two super-states
//! exist, `Public` and `Secure`; [`login`](NavigationController::login) is the
//! only way in and [`logout`](NavigationController::logout) the only way out.

use avellon_core::prelude::*;
use avellon_core::PageId;

use crate::auth::{CredentialVerifier, MockVerifier};
use crate::session::SessionState;

#[derive(Debug)]
pub struct NavigationController {
    session: SessionState,
    verifier: Box<dyn CredentialVerifier>,
    failed_attempts: u32,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    /// Controller with the mock verifier and a fresh `Public/Home` session.
    pub fn new() -> Self {
        Self::with_verifier(Box::new(MockVerifier))
    }

    pub fn with_verifier(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            session: SessionState::new(),
            verifier,
            failed_attempts: 0,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Rejected login attempts over the life of the session. No lockout applies.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Sidebar selection in the public menu.
    ///
    /// Only moves the page when `item` differs from the previous public
    /// selection. Returns whether a transition happened.
    pub fn select_public_item(&mut self, item: PageId) -> bool {
        if self.session.authenticated {
            debug!("Ignoring public selection {} while authenticated", item);
            return false;
        }
        if self.session.last_selected_public == Some(item) {
            return false;
        }

        debug!("Public selection: {} -> {}", self.session.current_page, item);
        self.session.current_page = item;
        self.session.last_selected_public = Some(item);
        true
    }

    /// Sidebar selection in the secure console menu. Same change detection as
    /// [`select_public_item`](Self::select_public_item).
    pub fn select_secure_item(&mut self, item: PageId) -> bool {
        if !self.session.authenticated {
            debug!("Ignoring secure selection {} while unauthenticated", item);
            return false;
        }
        if self.session.last_selected_secure == Some(item) {
            return false;
        }

        debug!("Secure selection: {} -> {}", self.session.current_page, item);
        self.session.current_page = item;
        self.session.last_selected_secure = Some(item);
        true
    }

    /// Enter the secure console.
    ///
    /// On rejection the session is left untouched and the verifier's
    /// [`Error::Auth`] is returned.
    pub fn login(&mut self, identity: &str, keycode: &str) -> Result<()> {
        match self.verifier.verify(identity, keycode) {
            Ok(grant) => {
                info!("Login accepted for '{}' as {}", identity, grant.role);
                self.session.authenticated = true;
                self.session.role = Some(grant.role);
                self.session.current_page = PageId::WarRoom;
                Ok(())
            }
            Err(e) => {
                self.failed_attempts += 1;
                warn!(
                    "Login rejected (attempt {}): {:?}",
                    self.failed_attempts, e
                );
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        info!("Logout from {}", self.session.current_page);
        self.session.authenticated = false;
        self.session.role = None;
        self.session.current_page = PageId::Home;
    }

    /// Unconditional jump, used by buttons inside page bodies.
    pub fn request_page(&mut self, target: PageId) {
        debug!("Page requested: {} -> {}", self.session.current_page, target);
        self.session.current_page = target;
    }
}
