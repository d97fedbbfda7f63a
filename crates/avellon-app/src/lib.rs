//! avellon-app - Session state, navigation and page views for the AVELLON console
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`Message`]s flow through [`handler::update`] into
//! [`AppState`], and the [`router::Router`] turns the session into a
//! [`view::PageView`] for whichever display surface is attached.
//!
//! The navigation rules live in [`controller::NavigationController`], which is
//! the only code that mutates [`session::SessionState`].

pub mod auth;
pub mod config;
pub mod controller;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod router;
pub mod session;
pub mod signals;
pub mod state;
pub mod view;
pub mod widget_state;

// Re-export primary types
pub use auth::{CredentialVerifier, Grant, MockVerifier, COMMANDER_ROLE};
pub use controller::NavigationController;
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use router::Router;
pub use session::SessionState;
pub use state::{AppPhase, AppState, Focus};
pub use view::PageView;
pub use widget_state::WidgetState;
