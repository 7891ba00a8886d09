//! Reusable scrollbar rendering utility
//!
//! Provides the horizontal scrollbar under the news strip and the vertical
//! scrollbar beside the page body.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

/// Render a horizontal scrollbar along the bottom row of `area`
///
/// The scrollbar is only rendered if the content exceeds the viewport size.
///
/// # Arguments
/// * `buf` - The buffer to render to
/// * `area` - The area whose bottom row holds the scrollbar
/// * `content_size` - Total width of the content
/// * `viewport_size` - Visible width
/// * `scroll_offset` - Current scroll position (0 = left)
/// * `color` - Color for the scrollbar thumb and track
pub fn render_horizontal_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    content_size: usize,
    viewport_size: usize,
    scroll_offset: usize,
    color: Color,
) {
    render_scrollbar(
        buf,
        area,
        ScrollbarOrientation::HorizontalBottom,
        content_size,
        viewport_size,
        scroll_offset,
        color,
    );
}

/// Render a vertical scrollbar along the right column of `area`
pub fn render_vertical_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    content_size: usize,
    viewport_size: usize,
    scroll_offset: usize,
    color: Color,
) {
    render_scrollbar(
        buf,
        area,
        ScrollbarOrientation::VerticalRight,
        content_size,
        viewport_size,
        scroll_offset,
        color,
    );
}

fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    orientation: ScrollbarOrientation,
    content_size: usize,
    viewport_size: usize,
    scroll_offset: usize,
    color: Color,
) {
    if content_size <= viewport_size || viewport_size == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(orientation)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // To make the thumb reach the end when at max scroll, we pass
    // content_length = max_scroll + 1, so max_position equals our max_scroll.
    let max_scroll = content_size.saturating_sub(viewport_size);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_offset.min(max_scroll))
        .viewport_content_length(viewport_size);

    scrollbar.render(area, buf, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
