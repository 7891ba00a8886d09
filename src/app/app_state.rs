use ratatui::layout::Position;
use std::time::Instant;

use crate::carousel::{CarouselController, CarouselPhase, CarouselSettings};
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::news::{self, NewsItem};
use crate::notification::NotificationState;
use crate::scroll::{ScrollState, StripScroll};
use crate::site::{PageLayout, Section, SiteContent};

pub struct App {
    pub site: SiteContent,
    pub news: Vec<NewsItem>,
    pub carousel: CarouselController<StripScroll>,
    pub page_scroll: ScrollState,
    /// Section placement from the last render pass
    pub page_layout: PageLayout,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    /// Whether the pointer is over the news strip as of the last layout
    pub pointer_over_strip: bool,
    /// Cell of the last mouse event, re-tested after every render
    pub last_pointer: Option<Position>,
    /// Dropdown nav menu on terminals too narrow for the header links
    pub menu_open: bool,
    pub should_quit: bool,
    needs_render: bool,
    last_column: u16,
    last_phase: CarouselPhase,
}

impl App {
    pub fn new(config: &Config, now: Instant) -> Self {
        let news = if config.news.is_empty() {
            news::default_news()
        } else {
            config.news.clone()
        };

        let mut carousel = CarouselController::new(CarouselSettings::from(&config.carousel));
        carousel.mount(
            StripScroll::with_bounds(news::news_render::strip_content_width(news.len()), 0),
            now,
        );
        let last_phase = carousel.phase();

        Self {
            site: SiteContent::default().with_social(config.social.clone()),
            news,
            carousel,
            page_scroll: ScrollState::new(),
            page_layout: PageLayout::new(0),
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            pointer_over_strip: false,
            last_pointer: None,
            menu_open: false,
            should_quit: false,
            needs_render: true,
            last_column: 0,
            last_phase,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Run any due carousel refresh and expire notifications
    ///
    /// Marks the app dirty only when something visible changed.
    pub fn tick_carousel(&mut self, now: Instant) {
        self.carousel.poll_timers(now);
        self.carousel.run_frame(now);

        let column = self
            .carousel
            .viewport()
            .map(|strip| strip.column())
            .unwrap_or(0);
        let phase = self.carousel.phase();
        if column != self.last_column || phase != self.last_phase {
            self.last_column = column;
            self.last_phase = phase;
            self.mark_dirty();
        }

        if self.notification.clear_if_expired(now) {
            self.mark_dirty();
        }
    }

    /// Scroll the page so `section` sits right under the header
    pub fn scroll_to_section(&mut self, section: Section) {
        let top = self.page_layout.section(section).y;
        self.page_scroll.offset = top.min(self.page_scroll.max_offset);
        self.mark_dirty();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.mark_dirty();
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.mark_dirty();
        }
    }

    /// Stop the carousel before leaving
    pub fn shutdown(&mut self) {
        self.carousel.unmount();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
