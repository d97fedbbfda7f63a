//! Page body dispatch

use avellon_app::config::MapDetail;
use avellon_app::PageView;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{
    AboutPage, AnalyticsPage, ContactPage, HomePage, InsightsPage, LoginPage, PlatformPage,
    ServicesPage, SimulationPage, SolutionsPage, SystemLogsPage, WarRoomPage,
};

/// Draws whichever page the router rendered.
pub struct PageBody<'a> {
    view: &'a PageView,
    focused: bool,
    map_detail: MapDetail,
}

impl<'a> PageBody<'a> {
    pub fn new(view: &'a PageView, focused: bool) -> Self {
        Self {
            view,
            focused,
            map_detail: MapDetail::default(),
        }
    }

    pub fn map_detail(mut self, detail: MapDetail) -> Self {
        self.map_detail = detail;
        self
    }
}

impl Widget for PageBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focused;
        match self.view {
            PageView::Home(v) => HomePage::new(v, focused).render(area, buf),
            PageView::Platform(v) => PlatformPage::new(v, focused).render(area, buf),
            PageView::Solutions(v) => SolutionsPage::new(v, focused).render(area, buf),
            PageView::Services(v) => ServicesPage::new(v, focused).render(area, buf),
            PageView::Insights(v) => InsightsPage::new(v, focused).render(area, buf),
            PageView::About(v) => AboutPage::new(v, focused).render(area, buf),
            PageView::Contact(v) => ContactPage::new(v, focused).render(area, buf),
            PageView::Login(v) => LoginPage::new(v, focused).render(area, buf),
            PageView::WarRoom(v) => {
                WarRoomPage::new(v, focused, self.map_detail).render(area, buf)
            }
            PageView::Analytics(v) => AnalyticsPage::new(v, focused).render(area, buf),
            PageView::Simulation(v) => SimulationPage::new(v, focused).render(area, buf),
            PageView::SystemLogs(v) => SystemLogsPage::new(v, focused).render(area, buf),
        }
    }
}
