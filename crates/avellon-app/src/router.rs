//! Page router
//!
//! Maps the current page to a renderer, gating secure pages behind
//! authentication. Unauthenticated requests for a secure page render the
//! login view instead.

use avellon_core::prelude::*;
use avellon_core::{FixtureProvider, PageId};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::view::{self, PageView};
use crate::widget_state::WidgetState;

#[derive(Debug)]
pub struct Router {
    fixtures: FixtureProvider,
    rng: StdRng,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Router {
    /// `seed` makes the risk trend reproducible; `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!("Router seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            fixtures: FixtureProvider::new(),
            rng,
        }
    }

    /// Page that will actually be rendered for `page`.
    pub fn resolve(page: PageId, authenticated: bool) -> PageId {
        if page.is_secure() && !authenticated {
            PageId::Login
        } else {
            page
        }
    }

    /// Render the view for `page`.
    pub fn dispatch(
        &mut self,
        page: PageId,
        authenticated: bool,
        widgets: &WidgetState,
    ) -> PageView {
        let resolved = Self::resolve(page, authenticated);
        if resolved != page {
            debug!("{} requires authentication, rendering login", page);
        }

        let notice = widgets.notice.as_deref();
        match resolved {
            PageId::Home => PageView::Home(view::render_home()),
            PageId::Platform => PageView::Platform(view::render_platform()),
            PageId::Solutions => PageView::Solutions(view::render_solutions(widgets.solutions_tab)),
            PageId::Services => PageView::Services(view::render_services()),
            PageId::Insights => PageView::Insights(view::render_insights(
                &widgets.insights_expanded,
                widgets.insights_cursor,
            )),
            PageId::About => PageView::About(view::render_about()),
            PageId::Contact => PageView::Contact(view::render_contact(&widgets.contact, notice)),
            PageId::Login => PageView::Login(view::render_login(&widgets.login)),
            PageId::WarRoom => PageView::WarRoom(view::render_war_room(&self.fixtures)),
            PageId::Analytics => PageView::Analytics(view::render_analytics(
                &self.fixtures,
                &mut self.rng,
                widgets.analytics_tab,
            )),
            PageId::Simulation => {
                PageView::Simulation(view::render_simulation(&widgets.simulation, notice))
            }
            PageId::SystemLogs => PageView::SystemLogs(view::render_system_logs(&self.fixtures)),
        }
    }

    /// Parse a page label, falling back to Home on anything unrecognized.
    pub fn page_for_label(label: &str) -> PageId {
        match label.parse::<PageId>() {
            Ok(page) => page,
            Err(e) => {
                warn!("{}, falling back to {}", e, PageId::Home);
                PageId::Home
            }
        }
    }

    /// [`dispatch`](Self::dispatch) keyed by a page label.
    pub fn dispatch_label(
        &mut self,
        label: &str,
        authenticated: bool,
        widgets: &WidgetState,
    ) -> PageView {
        self.dispatch(Self::page_for_label(label), authenticated, widgets)
    }
}
