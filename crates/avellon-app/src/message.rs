//! Message types for the application (TEA pattern)

use avellon_core::PageId;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout with no input
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Sidebar Messages
    // ─────────────────────────────────────────────────────────
    /// Move the sidebar radio up one entry
    SidebarPrev,
    /// Move the sidebar radio down one entry
    SidebarNext,
    /// Radio value in the public menu
    SelectPublic(PageId),
    /// Radio value in the secure console menu
    SelectSecure(PageId),

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// In-page button jump (e.g. "Request Strategic Briefing")
    RequestPage(PageId),
    /// Sidebar "Secure Login" button
    OpenLogin,
    /// Leave the login form for the page the radio holds
    CancelLogin,
    /// Submit the login form
    SubmitLogin,
    /// Sidebar "Log Out" button
    Logout,

    // ─────────────────────────────────────────────────────────
    // Page Control Messages
    // ─────────────────────────────────────────────────────────
    /// Switch keyboard focus between sidebar and page body
    ToggleFocus,
    FocusSidebar,
    FocusContent,
    /// Move to the previous control in the page body
    FieldPrev,
    /// Move to the next control in the page body
    FieldNext,
    /// Left/right on tabs, sliders and select boxes
    Adjust(i32),
    /// Press the focused control
    Activate,
    InputChar(char),
    InputBackspace,
}
