//! Application state (Model in TEA pattern)

use avellon_core::prelude::*;
use avellon_core::PageId;

use crate::config::Settings;
use crate::controller::NavigationController;
use crate::router::Router;
use crate::session::SessionState;
use crate::view::PageView;
use crate::widget_state::WidgetState;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub controller: NavigationController,
    pub widgets: WidgetState,
    pub focus: Focus,
    pub phase: AppPhase,
    pub settings: Settings,
    router: Router,
    /// Last rendered page; `None` when an event has invalidated it.
    view: Option<PageView>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Build state from loaded settings.
    ///
    /// The public radio mounts on Home first; a configured start page is then
    /// requested directly, the same way an in-page button would.
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_controller(NavigationController::new(), settings)
    }

    pub fn with_controller(mut controller: NavigationController, settings: Settings) -> Self {
        controller.select_public_item(PageId::Home);

        if let Some(label) = settings.session.start_page.as_deref() {
            let page = Router::page_for_label(label);
            info!("Starting on {}", page);
            controller.request_page(page);
        }

        Self {
            router: Router::new(settings.fixtures.seed),
            controller,
            widgets: WidgetState::default(),
            focus: Focus::default(),
            phase: AppPhase::default(),
            settings,
            view: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        self.controller.session()
    }

    /// Page the router will actually render for the current session.
    pub fn rendered_page(&self) -> PageId {
        let session = self.session();
        Router::resolve(session.current_page, session.authenticated)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Drop the cached view so the next draw re-renders.
    pub fn invalidate_view(&mut self) {
        self.view = None;
    }

    /// Render the current page if the cached view is stale.
    pub fn ensure_view(&mut self) {
        self.page_view();
    }

    /// Cached view, rendering it first if needed.
    pub fn page_view(&mut self) -> &PageView {
        let session = self.controller.session();
        let router = &mut self.router;
        let widgets = &self.widgets;
        self.view.get_or_insert_with(|| {
            router.dispatch(session.current_page, session.authenticated, widgets)
        })
    }

    /// Cached view without rendering. `None` until [`ensure_view`](Self::ensure_view) runs.
    pub fn current_view(&self) -> Option<&PageView> {
        self.view.as_ref()
    }
}
