pub mod hud;
pub mod menu;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Returns a `width` x `height` rect centered in `area`, shrunk to fit.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered;

    #[test]
    fn centered_rect_sits_in_the_middle() {
        let area = Rect::new(0, 0, 60, 30);

        assert_eq!(centered(area, 20, 10), Rect::new(20, 10, 20, 10));
    }

    #[test]
    fn centered_rect_never_exceeds_the_area() {
        let area = Rect::new(2, 3, 10, 4);
        let inner = centered(area, 40, 40);

        assert_eq!(inner, area);
    }
}
