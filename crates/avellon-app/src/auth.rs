//! Credential verification seam
//!
//! The console ships with a mock verifier. Real verification plugs in by
//! implementing [`CredentialVerifier`] and handing it to
//! [`NavigationController::with_verifier`](crate::controller::NavigationController::with_verifier).

use avellon_core::prelude::*;

/// Role granted to every successful mock login.
pub const COMMANDER_ROLE: &str = "COMMANDER";

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub role: String,
}

/// Decides whether an identity/keycode pair may enter the secure console.
pub trait CredentialVerifier: std::fmt::Debug + Send {
    /// Returns the granted role, or [`Error::Auth`] when rejected.
    fn verify(&self, identity: &str, keycode: &str) -> Result<Grant>;
}

/// Accepts any pair where both fields are non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl CredentialVerifier for MockVerifier {
    fn verify(&self, identity: &str, keycode: &str) -> Result<Grant> {
        if identity.is_empty() {
            return Err(Error::auth("identity is empty"));
        }
        if keycode.is_empty() {
            return Err(Error::auth("keycode is empty"));
        }

        Ok(Grant {
            role: COMMANDER_ROLE.to_string(),
        })
    }
}
