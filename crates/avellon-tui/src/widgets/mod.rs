//! Custom widget components

mod analytics;
mod footer;
mod login;
mod page;
mod public;
mod sidebar;
mod simulation;
mod system_logs;
mod text;
mod war_room;

pub use analytics::AnalyticsPage;
pub use footer::Footer;
pub use login::LoginPage;
pub use page::PageBody;
pub use public::{
    AboutPage, ContactPage, HomePage, InsightsPage, PlatformPage, ServicesPage, SolutionsPage,
};
pub use sidebar::Sidebar;
pub use simulation::SimulationPage;
pub use system_logs::SystemLogsPage;
pub use war_room::WarRoomPage;
