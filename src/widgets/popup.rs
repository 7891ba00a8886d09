use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_rect_shrinks_both_axes() {
        let area = Rect::new(10, 5, 40, 20);

        let inset = inset_rect(area, 2, 1);

        assert_eq!(inset, Rect::new(12, 6, 36, 18));
    }

    #[test]
    fn test_inset_rect_saturates_on_tiny_area() {
        let area = Rect::new(0, 0, 3, 1);

        let inset = inset_rect(area, 2, 1);

        assert_eq!(inset.width, 0);
        assert_eq!(inset.height, 0);
    }
}
