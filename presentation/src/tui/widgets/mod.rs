//! TUI widgets: ratatui components for the two screens
//!
//! Layout:
//! ┌── Header (4) ───────────────────────────────┐
//! ├── Express | Reflection (flex) ──────────────┤
//! └── StatusBar (1) ────────────────────────────┘

pub mod express;
pub mod header;
pub mod help;
pub mod reflection;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }

    /// Centered overlay area, sized as a percentage of `area`
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Collect a rendered buffer into one string, for widget tests
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.body.height, 19);
    }

    #[test]
    fn test_centered_overlay_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert_eq!(overlay.width, 60);
        assert_eq!(overlay.x, 20);
    }
}
