//! Tests for news_render

use super::news_render::*;
use super::*;
use crate::scroll::StripScroll;
use ratatui::{buffer::Buffer, layout::Rect};

fn buffer_text(buf: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_strip_content_width() {
    assert_eq!(strip_content_width(0), STRIP_PADDING * 2);
    assert_eq!(strip_content_width(1), CARD_WIDTH + STRIP_PADDING * 2);
    assert_eq!(
        strip_content_width(4),
        4 * CARD_WIDTH + 3 * CARD_GAP + STRIP_PADDING * 2
    );
}

#[test]
fn test_strip_content_width_saturates() {
    assert_eq!(strip_content_width(usize::MAX), u16::MAX);
}

#[test]
fn test_strip_area_sits_below_heading() {
    let area = Rect::new(0, 10, 80, SECTION_HEIGHT);
    let strip = strip_area(area);

    assert_eq!(strip.y, 12);
    assert_eq!(strip.height, CARD_HEIGHT);
    assert_eq!(strip.width, 80);
}

#[test]
fn test_render_strip_at_start_shows_first_card() {
    let area = Rect::new(0, 0, 40, CARD_HEIGHT);
    let mut buf = Buffer::empty(area);

    render_strip(&mut buf, area, &default_news(), 0);

    let text = buffer_text(&buf);
    assert!(text.contains("EVENT"));
    assert!(text.contains("Kunjungan"));
    assert!(text.contains("12 Des 2023"));
    assert!(!text.contains("Renovasi"));
}

#[test]
fn test_render_strip_scrolled_shows_later_cards() {
    let area = Rect::new(0, 0, 40, CARD_HEIGHT);
    let mut buf = Buffer::empty(area);
    let second_card = STRIP_PADDING + CARD_WIDTH + CARD_GAP;

    render_strip(&mut buf, area, &default_news(), second_card);

    let text = buffer_text(&buf);
    assert!(text.contains("Ujian Tahfidz"));
    assert!(!text.contains("Kunjungan"));
}

#[test]
fn test_render_strip_with_no_items_does_not_panic() {
    let area = Rect::new(0, 0, 40, CARD_HEIGHT);
    let mut buf = Buffer::empty(area);

    render_strip(&mut buf, area, &[], 0);
}

#[test]
fn test_render_section_returns_strip_area() {
    let area = Rect::new(0, 0, 60, SECTION_HEIGHT);
    let mut buf = Buffer::empty(area);
    let items = default_news();
    let strip = StripScroll::with_bounds(strip_content_width(items.len()), 60);

    let strip_rect = render_section(&mut buf, area, "Kabar Ashabul Quran", &items, &strip);

    assert_eq!(strip_rect, strip_area(area));
    let text = buffer_text(&buf);
    assert!(text.contains("Kabar Ashabul Quran"));
    assert!(text.contains("Baca Selengkapnya"));
}
