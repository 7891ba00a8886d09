//! News section rendering
//!
//! The strip is drawn at full width into an offscreen buffer and the window
//! starting at the carousel's current column is copied into place, so cards
//! can be partially visible at either edge.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::news_item::NewsItem;
use crate::scroll::StripScroll;
use crate::theme;
use crate::widgets::{scrollbar, viewport_blit};

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 11;
pub const CARD_GAP: u16 = 2;
pub const STRIP_PADDING: u16 = 2;

const HEADING_HEIGHT: u16 = 2;
const SCROLLBAR_HEIGHT: u16 = 1;
const BOTTOM_MARGIN: u16 = 1;

/// Rows taken by the whole news section
pub const SECTION_HEIGHT: u16 = HEADING_HEIGHT + CARD_HEIGHT + SCROLLBAR_HEIGHT + BOTTOM_MARGIN;

const READ_MORE: &str = "Baca Selengkapnya →";

/// Width of the strip holding `count` cards, including edge padding
pub fn strip_content_width(count: usize) -> u16 {
    let count = count.min(u16::MAX as usize) as u16;
    let cards = count.saturating_mul(CARD_WIDTH);
    let gaps = count.saturating_sub(1).saturating_mul(CARD_GAP);
    cards
        .saturating_add(gaps)
        .saturating_add(STRIP_PADDING * 2)
}

/// Area of the strip inside a section laid out at `area`
pub fn strip_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + HEADING_HEIGHT,
        width: area.width,
        height: CARD_HEIGHT.min(area.height.saturating_sub(HEADING_HEIGHT)),
    }
}

/// Render heading, card strip and scrollbar, returning the strip area
pub fn render_section(
    buf: &mut Buffer,
    area: Rect,
    heading: &str,
    items: &[NewsItem],
    strip: &StripScroll,
) -> Rect {
    Block::new()
        .style(Style::default().bg(theme::news::BG))
        .render(area, buf);

    let heading_area = Rect {
        height: HEADING_HEIGHT.min(area.height),
        ..area
    };
    Paragraph::new(Line::from(Span::styled(
        format!("  {}", heading),
        theme::news::HEADING,
    )))
    .render(heading_area, buf);

    let strip_rect = strip_area(area);
    render_strip(buf, strip_rect, items, strip.column());

    let scrollbar_y = strip_rect.y + strip_rect.height;
    if scrollbar_y < area.y + area.height {
        let scrollbar_area = Rect {
            x: area.x + STRIP_PADDING,
            y: scrollbar_y,
            width: area.width.saturating_sub(STRIP_PADDING * 2),
            height: SCROLLBAR_HEIGHT,
        };
        scrollbar::render_horizontal_scrollbar(
            buf,
            scrollbar_area,
            strip.content_width() as usize,
            strip.viewport_width() as usize,
            strip.column() as usize,
            theme::news::SCROLLBAR,
        );
    }

    strip_rect
}

/// Draw every card offscreen and copy the visible window starting at `column`
pub fn render_strip(buf: &mut Buffer, area: Rect, items: &[NewsItem], column: u16) {
    if area.is_empty() {
        return;
    }

    let mut canvas = Buffer::empty(Rect::new(
        0,
        0,
        strip_content_width(items.len()),
        area.height,
    ));
    canvas.set_style(canvas.area, Style::default().bg(theme::news::BG));

    let mut x = STRIP_PADDING;
    for item in items {
        if x.saturating_add(CARD_WIDTH) > canvas.area.width {
            break;
        }
        render_card(&mut canvas, Rect::new(x, 0, CARD_WIDTH, area.height), item);
        x += CARD_WIDTH + CARD_GAP;
    }

    viewport_blit::blit(&canvas, Position::new(column, 0), buf, area);
}

fn render_card(buf: &mut Buffer, area: Rect, item: &NewsItem) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::news::CARD_BORDER));
    let inner = block.inner(area);
    block.render(area, buf);

    let [image, date, title, _, link] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    Block::new()
        .style(Style::default().bg(theme::news::IMAGE_BAND))
        .render(image, buf);
    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", item.category.to_uppercase()),
            theme::news::BADGE,
        ),
    ]))
    .render(
        Rect {
            y: image.y + 1,
            height: 1.min(image.height.saturating_sub(1)),
            ..image
        },
        buf,
    );

    Paragraph::new(Span::styled(
        format!(" ◷ {}", item.date),
        theme::news::DATE,
    ))
    .render(date, buf);

    Paragraph::new(Span::styled(item.title.as_str(), theme::news::TITLE))
        .wrap(Wrap { trim: true })
        .render(
            Rect {
                x: title.x + 1,
                width: title.width.saturating_sub(2),
                ..title
            },
            buf,
        );

    Paragraph::new(Span::styled(format!(" {}", READ_MORE), theme::news::LINK)).render(link, buf);
}
