//! Tests for the update function and key handling

use avellon_core::PageId;

use super::*;
use crate::input_key::InputKey;
use crate::process::{process_all, process_message};
use crate::state::{AppState, Focus};
use crate::view::PageView;
use crate::widget_state::{LoginField, SimulationField};

fn key(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn type_text(state: &mut AppState, text: &str) {
    process_all(state, text.chars().map(|c| Message::Key(InputKey::Char(c))));
}

fn logged_in_state() -> AppState {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    type_text(&mut state, "ana");
    key(&mut state, InputKey::Enter);
    type_text(&mut state, "1234");
    key(&mut state, InputKey::Enter);
    state
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    assert!(state.widgets.has_text_focus(PageId::Login));

    key(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_q_quits_from_sidebar() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[test]
fn test_q_is_typed_into_text_fields() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    key(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.widgets.login.identity, "q");
}

#[test]
fn test_sidebar_cursor_selects_immediately() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Down);
    assert_eq!(state.session().current_page, PageId::Platform);

    key(&mut state, InputKey::Char('j'));
    assert_eq!(state.session().current_page, PageId::Solutions);

    key(&mut state, InputKey::Up);
    assert_eq!(state.session().current_page, PageId::Platform);
}

#[test]
fn test_sidebar_clamps_at_menu_edges() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Up);
    assert_eq!(state.session().current_page, PageId::Home);

    for _ in 0..20 {
        key(&mut state, InputKey::Down);
    }
    assert_eq!(state.session().current_page, PageId::Contact);
}

#[test]
fn test_briefing_button_keeps_radio_on_home() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('b'));
    assert_eq!(state.session().current_page, PageId::Contact);
    assert_eq!(state.session().menu_selection(), PageId::Home);

    // Next radio move goes from Home, not from Contact
    key(&mut state, InputKey::Down);
    assert_eq!(state.session().current_page, PageId::Platform);
}

#[test]
fn test_activate_on_home_requests_briefing() {
    let mut state = AppState::new();
    process_all(&mut state, [Message::FocusContent, Message::Activate]);
    assert_eq!(state.session().current_page, PageId::Contact);
}

#[test]
fn test_full_login_flow() {
    let mut state = logged_in_state();
    let session = state.session();
    assert!(session.authenticated);
    assert_eq!(session.current_page, PageId::WarRoom);
    assert_eq!(session.last_selected_secure, Some(PageId::WarRoom));
    assert_eq!(state.focus, Focus::Sidebar);
    assert!(state.widgets.login.keycode.is_empty());
    assert_eq!(state.page_view().page(), PageId::WarRoom);
}

#[test]
fn test_empty_login_shows_error_and_stays() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Enter);

    assert!(!state.session().authenticated);
    assert_eq!(state.session().current_page, PageId::Login);
    assert_eq!(
        state.widgets.login.error.as_deref(),
        Some("Invalid Credentials. Attempt Logged.")
    );
    assert_eq!(state.controller.failed_attempts(), 1);

    match state.page_view() {
        PageView::Login(login) => assert!(login.error.is_some()),
        other => panic!("expected login, got {:?}", other.page()),
    }
}

#[test]
fn test_keycode_is_masked_in_view() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    key(&mut state, InputKey::Down);
    assert_eq!(state.widgets.login.focus, LoginField::Keycode);
    type_text(&mut state, "hunter2");

    match state.page_view() {
        PageView::Login(login) => {
            assert_eq!(login.masked_keycode, "•••••••");
        }
        other => panic!("expected login, got {:?}", other.page()),
    }
}

#[test]
fn test_escape_cancels_login() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Char('l'));
    type_text(&mut state, "ana");

    key(&mut state, InputKey::Esc);
    assert_eq!(state.session().current_page, PageId::Platform);
    assert!(state.widgets.login.identity.is_empty());
    assert!(!state.should_quit());
}

#[test]
fn test_secure_navigation_and_logout() {
    let mut state = logged_in_state();

    key(&mut state, InputKey::Down);
    assert_eq!(state.session().current_page, PageId::Analytics);
    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Down);
    assert_eq!(state.session().current_page, PageId::SystemLogs);

    key(&mut state, InputKey::Char('o'));
    let session = state.session();
    assert!(!session.authenticated);
    assert_eq!(session.current_page, PageId::Home);
    assert_eq!(session.menu_selection(), PageId::Home);
}

#[test]
fn test_login_key_ignored_when_authenticated() {
    let mut state = logged_in_state();
    key(&mut state, InputKey::Char('l'));
    assert_eq!(state.session().current_page, PageId::WarRoom);
}

#[test]
fn test_relogin_remounts_secure_radio_on_war_room() {
    let mut state = logged_in_state();
    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Char('o'));

    process_all(
        &mut state,
        [
            Message::OpenLogin,
            Message::InputChar('a'),
            Message::FieldNext,
            Message::InputChar('b'),
            Message::SubmitLogin,
        ],
    );
    assert_eq!(state.session().current_page, PageId::WarRoom);
    assert_eq!(state.session().menu_selection(), PageId::WarRoom);
}

#[test]
fn test_tick_keeps_cached_view() {
    let mut state = logged_in_state();
    state.controller.request_page(PageId::Analytics);
    state.invalidate_view();
    let first = state.page_view().clone();

    process_message(&mut state, Message::Tick);
    assert_eq!(state.current_view(), Some(&first));
}

#[test]
fn test_other_messages_invalidate_view() {
    let mut state = AppState::new();
    state.ensure_view();
    process_message(&mut state, Message::ToggleFocus);
    assert!(state.current_view().is_none());
}

#[test]
fn test_solutions_tabs_follow_left_right() {
    let mut state = AppState::new();
    process_all(
        &mut state,
        [
            Message::SelectPublic(PageId::Solutions),
            Message::FocusContent,
            Message::Adjust(1),
            Message::Adjust(1),
            Message::Adjust(1),
        ],
    );
    assert_eq!(state.widgets.solutions_tab, 2);

    match state.page_view() {
        PageView::Solutions(view) => assert_eq!(view.tabs[view.selected_tab].label, "FINANCE"),
        other => panic!("expected solutions, got {:?}", other.page()),
    }
}

#[test]
fn test_insights_expander_toggle() {
    let mut state = AppState::new();
    process_all(
        &mut state,
        [
            Message::SelectPublic(PageId::Insights),
            Message::FocusContent,
            Message::FieldNext,
            Message::Activate,
        ],
    );
    assert_eq!(state.widgets.insights_expanded, [true, true, false]);
}

#[test]
fn test_simulation_duration_slider() {
    let mut state = logged_in_state();
    process_all(
        &mut state,
        [
            Message::SelectSecure(PageId::Simulation),
            Message::FocusContent,
            Message::FieldNext,
            Message::Adjust(1),
        ],
    );
    assert_eq!(state.widgets.simulation.focus, SimulationField::Duration);
    assert_eq!(state.widgets.simulation.params.duration_days, 15);

    match state.page_view() {
        PageView::Simulation(view) => assert_eq!(view.projection.progress, 30),
        other => panic!("expected simulation, got {:?}", other.page()),
    }
}

#[test]
fn test_run_simulation_sets_notice_until_page_changes() {
    let mut state = logged_in_state();
    process_all(
        &mut state,
        [
            Message::SelectSecure(PageId::Simulation),
            Message::FocusContent,
            Message::FieldNext,
            Message::FieldNext,
            Message::FieldNext,
            Message::Activate,
        ],
    );
    assert!(state.widgets.notice.is_some());

    process_message(&mut state, Message::SelectSecure(PageId::SystemLogs));
    assert!(state.widgets.notice.is_none());
}

#[test]
fn test_contact_form_typing_and_handshake() {
    let mut state = AppState::new();
    process_all(
        &mut state,
        [Message::SelectPublic(PageId::Contact), Message::FocusContent],
    );
    type_text(&mut state, "ops@example.org");
    key(&mut state, InputKey::Backspace);
    assert_eq!(state.widgets.contact.email, "ops@example.or");

    process_all(
        &mut state,
        [
            Message::FieldNext,
            Message::FieldNext,
            Message::Adjust(1),
            Message::FieldNext,
            Message::Activate,
        ],
    );
    assert_eq!(state.widgets.contact.inquiry.label(), "Strategic Partnership");
    assert!(state.widgets.notice.is_some());
    assert_eq!(state.session().current_page, PageId::Contact);
}

#[test]
fn test_handle_key_has_no_side_effects() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::SidebarNext));
    assert_eq!(handle_key(&state, InputKey::Char('o')), None);
    assert_eq!(state.session().current_page, PageId::Home);
}

#[test]
fn test_update_returns_follow_up_for_keys() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char('l')));
    assert_eq!(result.message, Some(Message::OpenLogin));
}
