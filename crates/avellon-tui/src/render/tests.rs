//! Full-screen rendering tests

use super::view;
use crate::test_utils::{authenticated_state, TestTerminal};
use avellon_app::config::{Settings, UiSettings};
use avellon_app::message::Message;
use avellon_app::process::{process_all, process_message};
use avellon_app::{AppState, InputKey};
use avellon_core::PageId;

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::wide();
    term.draw_with(|frame| view(frame, state));
    term
}

fn seeded() -> Settings {
    let mut settings = Settings::default();
    settings.fixtures.seed = Some(9);
    settings
}

#[test]
fn test_initial_screen_is_public_home() {
    let mut state = AppState::with_settings(seeded());
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("AVELLON"));
    assert!(term.buffer_contains("NAVIGATION"));
    assert!(term.buffer_contains("(•) Home"));
    assert!(term.buffer_contains("The Geometry of Risk."));
    assert!(term.buffer_contains("Restricted Access. Unauthorized use is a violation"));
}

#[test]
fn test_footer_can_be_hidden() {
    let mut settings = seeded();
    settings.ui = UiSettings {
        show_footer: false,
        ..Default::default()
    };
    let mut state = AppState::with_settings(settings);
    let term = render_screen(&mut state);

    assert!(!term.buffer_contains("ISO 27001"));
}

#[test]
fn test_sidebar_selection_changes_page() {
    let mut state = AppState::with_settings(seeded());
    process_all(
        &mut state,
        [Message::Key(InputKey::Down), Message::Key(InputKey::Down)],
    );
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("(•) Solutions"));
    assert!(term.buffer_contains("Strategic Solutions"));
}

#[test]
fn test_gated_request_renders_login() {
    let mut state = AppState::with_settings(seeded());
    process_message(&mut state, Message::RequestPage(PageId::SystemLogs));
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("AVELLON SECURE CONSOLE"));
    assert!(!term.buffer_contains("System Audit Logs"));
}

#[test]
fn test_login_lands_on_war_room() {
    let mut state = authenticated_state(seeded());
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("SECURE CONSOLE"));
    assert!(term.buffer_contains("(•) War Room"));
    assert!(term.buffer_contains("Role: COMMANDER"));
    assert!(term.buffer_contains("OPERATIONAL THEATER"));
    assert!(!term.buffer_contains("(•) Home"));
}

#[test]
fn test_rejected_login_shows_error_inline() {
    let mut state = AppState::with_settings(seeded());
    process_all(&mut state, [Message::OpenLogin, Message::SubmitLogin]);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Invalid Credentials. Attempt Logged."));
    assert!(term.buffer_contains("[l] Secure Login"));
}

#[test]
fn test_logout_returns_to_public_home() {
    let mut state = authenticated_state(seeded());
    process_message(&mut state, Message::Logout);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("NAVIGATION"));
    assert!(term.buffer_contains("The Geometry of Risk."));
    assert!(!term.buffer_contains("Role: COMMANDER"));
}

#[test]
fn test_tick_reuses_cached_trend() {
    let mut state = authenticated_state(Settings::default());
    process_message(&mut state, Message::SelectSecure(PageId::Analytics));
    let first = render_screen(&mut state).content();

    process_message(&mut state, Message::Tick);
    let second = render_screen(&mut state).content();

    assert_eq!(first, second);
}

#[test]
fn test_every_secure_page_renders_after_login() {
    let mut state = authenticated_state(seeded());

    let expectations = [
        (PageId::Analytics, "Strategic Analytics"),
        (PageId::Simulation, "Scenario Modeling"),
        (PageId::SystemLogs, "System Audit Logs"),
        (PageId::WarRoom, "INTELLIGENCE STREAM"),
    ];
    for (page, marker) in expectations {
        process_message(&mut state, Message::SelectSecure(page));
        let term = render_screen(&mut state);
        assert!(term.buffer_contains(marker), "{} missing {:?}", page, marker);
    }
}
