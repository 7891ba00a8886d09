use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use super::mouse_events;

mod global;

/// Poll timeout once the carousel no longer needs refreshes
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(250);

impl App {
    /// Wait for one terminal event, but never past the next carousel refresh
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self
            .carousel
            .time_until_next_frame(Instant::now())
            .unwrap_or(IDLE_POLL_TIMEOUT)
            .min(IDLE_POLL_TIMEOUT);

        if event::poll(timeout)? {
            self.handle_event(event::read()?, Instant::now());
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                mouse_events::handle_mouse_event(self, mouse_event, now);
            }
            Event::Resize(_, _) => {
                self.mark_dirty();
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
