//! Screen layout definitions for the TUI
//!
//! Sidebar on the left, page body on the right, optional legal footer along
//! the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 30;

/// Footer height (three centered lines, no border)
pub const FOOTER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub page: Rect,
    /// `None` when the footer is disabled in settings
    pub footer: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let (body, footer) = if show_footer {
        let chunks =
            Layout::vertical([Constraint::Min(3), Constraint::Length(FOOTER_HEIGHT)]).split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let columns =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)]).split(body);

    ScreenAreas {
        sidebar: columns[0],
        page: columns[1],
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_footer() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area, true);

        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.page.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.page.x, SIDEBAR_WIDTH);

        let footer = layout.footer.unwrap();
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(footer.y, 40 - FOOTER_HEIGHT);
        assert_eq!(layout.sidebar.height + footer.height, area.height);
    }

    #[test]
    fn test_layout_without_footer() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert!(layout.footer.is_none());
        assert_eq!(layout.sidebar.height, 24);
        assert_eq!(layout.page.height, 24);
    }

    #[test]
    fn test_sidebar_and_page_fill_width() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);
        assert_eq!(layout.sidebar.width + layout.page.width, area.width);
    }
}
