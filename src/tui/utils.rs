use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout utilities for TUI components
pub mod layout {
    use super::*;

    /// Create a centered rectangle with given width and height
    pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Create a centered rectangle with percentage of the parent area
    pub fn centered_rect_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let popup_layout = Layout::default()
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
            .split(popup_layout[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::layout::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
        // Clamped to the parent
        assert_eq!(centered_rect(200, 50, area), area);
    }

    #[test]
    fn test_centered_rect_percent_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_rect_percent(60, 50, area);
        assert!(inner.width <= 60 && inner.height <= 20);
        assert!(inner.x >= 20 && inner.y >= 10);
    }
}
