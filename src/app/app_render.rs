use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use std::time::Instant;

use super::app_state::App;
use super::mouse_hover;
use crate::carousel::{CarouselPhase, Direction};
use crate::layout::region_at;
use crate::news::news_render;
use crate::notification::render_notification;
use crate::site::{PageLayout, site_render};
use crate::theme;
use crate::widgets::{scrollbar, viewport_blit};

const STATUS_HEIGHT: u16 = 1;
const KEY_HINTS: &str = " ↑↓ PgUp PgDn scroll · drag news · click menu · q quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        let area = frame.area();
        self.layout_regions.clear();

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(site_render::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        self.update_bounds(body_area);

        self.render_body(frame.buffer_mut(), body_area);
        self.layout_regions.page = Some(body_area);

        self.render_header(frame.buffer_mut(), header_area, body_area);

        render_status_line(frame.buffer_mut(), status_area, self.carousel.phase());
        self.layout_regions.status_line = Some(status_area);

        // The page may have moved under a still pointer
        if let Some(pointer) = self.last_pointer {
            let region = region_at(&self.layout_regions, pointer.x, pointer.y);
            mouse_hover::handle_hover(self, region, now);
        }

        render_notification(frame, area, &mut self.notification, now);
    }

    /// Draw the header and, on narrow terminals, the open dropdown menu
    fn render_header(&mut self, buf: &mut Buffer, header_area: Rect, body_area: Rect) {
        let scrolled = self
            .page_scroll
            .is_scrolled_past(site_render::HEADER_SCROLL_THRESHOLD);
        let hits =
            site_render::render_header(buf, header_area, &self.site, scrolled, self.menu_open);
        self.layout_regions.header = Some(header_area);
        self.layout_regions.nav_links = hits.nav_links;
        self.layout_regions.menu_toggle = hits.menu_toggle;

        if hits.menu_toggle.is_none() {
            // Wide enough for the header links again
            self.menu_open = false;
            return;
        }
        if !self.menu_open {
            return;
        }

        let menu_area = Rect {
            height: site_render::mobile_menu_height(&self.site).min(body_area.height),
            ..body_area
        };
        if menu_area.is_empty() {
            return;
        }
        self.layout_regions.nav_links = site_render::render_mobile_menu(buf, menu_area, &self.site);
        self.layout_regions.menu = Some(menu_area);
    }

    /// Resize the page and the strip viewport to the current body area
    fn update_bounds(&mut self, body_area: Rect) {
        self.page_layout = PageLayout::new(body_area.width);
        self.page_scroll
            .update_bounds(u32::from(self.page_layout.height()), body_area.height);

        let content_width = news_render::strip_content_width(self.news.len());
        if let Some(strip) = self.carousel.viewport_mut() {
            strip.update_bounds(content_width, body_area.width);
        }
    }

    /// Draw the whole page offscreen and copy the scrolled window into place
    fn render_body(&mut self, buf: &mut Buffer, body_area: Rect) {
        if body_area.is_empty() {
            return;
        }

        let layout = self.page_layout;
        let mut page = Buffer::empty(layout.area());

        site_render::render_hero(&mut page, layout.hero, &self.site);
        site_render::render_bento(&mut page, layout.bento, &self.site);
        let strip = self.carousel.viewport().copied().unwrap_or_default();
        let strip_rect = news_render::render_section(
            &mut page,
            layout.news,
            &self.site.news_heading,
            &self.news,
            &strip,
        );
        site_render::render_footer(&mut page, layout.footer, &self.site);

        viewport_blit::blit(
            &page,
            Position::new(0, self.page_scroll.offset),
            buf,
            body_area,
        );

        self.layout_regions.news_strip =
            visible_rect(strip_rect, body_area, self.page_scroll.offset);

        scrollbar::render_vertical_scrollbar(
            buf,
            body_area,
            usize::from(layout.height()),
            usize::from(body_area.height),
            usize::from(self.page_scroll.offset),
            theme::status::PAGE_SCROLLBAR,
        );
    }
}

/// Screen area of a page rect once the body is scrolled by `offset` rows
///
/// Returns `None` when the rect is scrolled entirely out of the body.
pub(super) fn visible_rect(page_rect: Rect, body_area: Rect, offset: u16) -> Option<Rect> {
    let top = i32::from(body_area.y) + i32::from(page_rect.y) - i32::from(offset);
    let bottom = top + i32::from(page_rect.height);
    let clipped_top = top.max(i32::from(body_area.y));
    let clipped_bottom = bottom.min(i32::from(body_area.bottom()));

    if clipped_bottom <= clipped_top || page_rect.width == 0 {
        return None;
    }

    Some(Rect {
        x: body_area.x + page_rect.x,
        y: clipped_top as u16,
        width: page_rect.width.min(body_area.width),
        height: (clipped_bottom - clipped_top) as u16,
    })
}

/// Status line label for the carousel phase
pub(super) fn phase_label(phase: CarouselPhase) -> &'static str {
    match phase {
        CarouselPhase::Playing(Direction::Forward) => "▶ autoplay →",
        CarouselPhase::Playing(Direction::Backward) => "▶ autoplay ←",
        CarouselPhase::WaitingAtEdge(Direction::Forward) => "◼ end reached",
        CarouselPhase::WaitingAtEdge(Direction::Backward) => "◼ start reached",
        CarouselPhase::Paused => "⏸ paused",
        CarouselPhase::Dragging => "✋ dragging",
        CarouselPhase::Unmounted => "",
    }
}

fn render_status_line(buf: &mut Buffer, area: Rect, phase: CarouselPhase) {
    Block::new()
        .style(Style::default().bg(theme::status::BG))
        .render(area, buf);

    let phase_style = match phase {
        CarouselPhase::Playing(_) => theme::status::PLAYING,
        _ => theme::status::HELD,
    };

    let label = format!("{} ", phase_label(phase));
    let label_width = Line::from(label.as_str()).width() as u16;

    let [keys_area, phase_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)]).areas(area);

    Paragraph::new(Line::from(Span::styled(KEY_HINTS, theme::status::KEYS)))
        .render(keys_area, buf);
    Paragraph::new(Line::from(Span::styled(label, phase_style))).render(phase_area, buf);
}
