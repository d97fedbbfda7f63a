//! In-page control handlers
//!
//! Forms, tabs, expanders and sliders. None of these touch the session except
//! the login submit and the Home briefing button, which go through messages.

use avellon_core::prelude::*;
use avellon_core::PageId;

use crate::message::Message;
use crate::state::AppState;
use crate::view::AnalyticsTab;
use crate::widget_state::{step_index, ContactField, LoginField, SimulationField, INSIGHT_COUNT};

use super::UpdateResult;

const SOLUTION_TAB_COUNT: usize = 3;

pub fn handle_field_step(state: &mut AppState, delta: i32) -> UpdateResult {
    let page = state.rendered_page();
    let widgets = &mut state.widgets;
    match page {
        PageId::Login => widgets.login_focus_step(delta),
        PageId::Contact => widgets.contact_focus_step(delta),
        PageId::Simulation => widgets.simulation_focus_step(delta),
        PageId::Insights => {
            widgets.insights_cursor = step_index(widgets.insights_cursor, INSIGHT_COUNT, delta);
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_adjust(state: &mut AppState, delta: i32) -> UpdateResult {
    let page = state.rendered_page();
    let widgets = &mut state.widgets;
    match page {
        PageId::Solutions => {
            widgets.solutions_tab = step_index(widgets.solutions_tab, SOLUTION_TAB_COUNT, delta);
        }
        PageId::Analytics => {
            widgets.analytics_tab =
                step_index(widgets.analytics_tab, AnalyticsTab::ALL.len(), delta);
        }
        PageId::Simulation => widgets.adjust_simulation(delta),
        PageId::Contact if widgets.contact.focus == ContactField::InquiryType => {
            widgets.cycle_inquiry(delta);
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let page = state.rendered_page();
    let widgets = &mut state.widgets;
    match page {
        PageId::Home => return UpdateResult::message(Message::RequestPage(PageId::Contact)),

        PageId::Login => match widgets.login.focus {
            LoginField::Identity => widgets.login_focus_step(1),
            LoginField::Keycode | LoginField::Authenticate => {
                return UpdateResult::message(Message::SubmitLogin);
            }
        },

        PageId::Contact => match widgets.contact.focus {
            ContactField::Email | ContactField::Organization => widgets.contact_focus_step(1),
            ContactField::InquiryType => widgets.cycle_inquiry(1),
            ContactField::InitiateHandshake => {
                info!(
                    "Handshake requested: {} ({})",
                    widgets.contact.inquiry.label(),
                    widgets.contact.organization
                );
                widgets.notice =
                    Some("Handshake initiated. A liaison will respond via secure channel.".into());
            }
        },

        PageId::Insights => widgets.toggle_insight(),

        PageId::Simulation => {
            if widgets.simulation.focus == SimulationField::Run {
                let params = widgets.simulation.params;
                info!(
                    "Simulation run: {} / {} days / {}",
                    params.scenario.label(),
                    params.duration_days,
                    params.severity.label()
                );
                widgets.notice = Some(format!(
                    "Simulation queued: {}, {} days, {}",
                    params.scenario.label(),
                    params.duration_days,
                    params.severity.label()
                ));
            } else {
                widgets.simulation_focus_step(1);
            }
        }

        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    let page = state.rendered_page();
    if let Some(buffer) = state.widgets.text_target(page) {
        buffer.push(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    let page = state.rendered_page();
    if let Some(buffer) = state.widgets.text_target(page) {
        buffer.pop();
    }
    UpdateResult::none()
}
