use std::time::{Duration, Instant};

use super::carousel_events::CarouselEvent;
use super::carousel_settings::CarouselSettings;
use super::drag_state::DragState;
use super::edge_timer::EdgeTimer;
use super::frame_loop::FrameLoop;
use super::motion_state::{Direction, MotionState};
use crate::scroll::Viewport;

/// What the carousel is visibly doing, for status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Unmounted,
    Dragging,
    Paused,
    WaitingAtEdge(Direction),
    Playing(Direction),
}

/// Ping-pong autoplay over a viewport, with hover pause and drag override
///
/// The controller holds the viewport only while mounted. Every operation on
/// an unmounted controller is a no-op.
#[derive(Debug)]
pub struct CarouselController<V: Viewport> {
    settings: CarouselSettings,
    viewport: Option<V>,
    motion: MotionState,
    drag: DragState,
    edge_timer: EdgeTimer,
    frame_loop: Option<FrameLoop>,
}

impl<V: Viewport> CarouselController<V> {
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            settings,
            viewport: None,
            motion: MotionState::new(),
            drag: DragState::default(),
            edge_timer: EdgeTimer::new(),
            frame_loop: None,
        }
    }

    /// Take ownership of `viewport`, reset all motion state, and start ticking
    pub fn mount(&mut self, viewport: V, now: Instant) {
        self.unmount();

        self.viewport = Some(viewport);
        self.motion = MotionState::new();
        self.drag = DragState::default();
        self.frame_loop = Some(FrameLoop::start(now, self.settings.frame_rate));

        #[cfg(debug_assertions)]
        log::debug!("Carousel mounted with {:?}", self.settings);
    }

    /// Stop the frame loop, drop any pending edge flip, and release the viewport
    pub fn unmount(&mut self) -> Option<V> {
        if let Some(mut frames) = self.frame_loop.take() {
            frames.cancel();
        }
        self.edge_timer.cancel();
        self.drag.stop();

        let viewport = self.viewport.take();

        #[cfg(debug_assertions)]
        if viewport.is_some() {
            log::debug!("Carousel unmounted");
        }

        viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn edge_timer(&self) -> &EdgeTimer {
        &self.edge_timer
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.viewport.is_none() {
            CarouselPhase::Unmounted
        } else if self.drag.active {
            CarouselPhase::Dragging
        } else if self.motion.paused {
            CarouselPhase::Paused
        } else if self.motion.waiting_at_edge {
            CarouselPhase::WaitingAtEdge(self.motion.direction)
        } else {
            CarouselPhase::Playing(self.motion.direction)
        }
    }

    /// Dispatch a single input event
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) {
        match event {
            CarouselEvent::Tick => self.tick(now),
            CarouselEvent::PointerEnter => self.pointer_enter(),
            CarouselEvent::PointerLeave => self.pointer_leave(),
            CarouselEvent::PointerDown { x } => self.pointer_down(x),
            CarouselEvent::PointerMove { x } => self.pointer_move(x),
            CarouselEvent::PointerUp => self.pointer_up(),
        }
    }

    /// Run a tick if a display refresh is due, returning whether one ran
    pub fn run_frame(&mut self, now: Instant) -> bool {
        let Some(frames) = self.frame_loop.as_mut() else {
            return false;
        };
        if !frames.is_due(now) {
            return false;
        }
        frames.advance(now);
        self.tick(now);
        true
    }

    /// How long the host may wait before the carousel needs attention again
    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        let frame = self
            .frame_loop
            .as_ref()
            .and_then(|frames| frames.time_until_next(now));
        match (frame, self.edge_timer.remaining(now)) {
            (Some(frame), Some(edge)) => Some(frame.min(edge)),
            (frame, edge) => frame.or(edge),
        }
    }

    /// Deliver a due edge flip, returning whether the direction changed
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        if self.viewport.is_none() {
            return false;
        }
        let Some(direction) = self.edge_timer.fire_if_due(now) else {
            return false;
        };

        self.motion.direction = direction;
        self.motion.waiting_at_edge = false;

        #[cfg(debug_assertions)]
        log::debug!("Carousel edge wait over, now moving {:?}", direction);

        true
    }

    /// Advance autonomous motion by one display refresh
    pub fn tick(&mut self, now: Instant) {
        self.poll_timers(now);

        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        if self.drag.active || !self.motion.can_advance() {
            return;
        }

        let offset = viewport.offset();
        let max_offset = viewport.max_offset();
        let tolerance = self.settings.edge_tolerance;

        match self.motion.direction {
            Direction::Forward if offset < max_offset - tolerance => {
                viewport.set_offset((offset + self.settings.speed).min(max_offset));
            }
            Direction::Backward if offset > tolerance => {
                viewport.set_offset((offset - self.settings.speed).max(0.0));
            }
            direction => {
                self.motion.waiting_at_edge = true;
                self.edge_timer
                    .schedule(now, self.settings.edge_delay, direction.reversed());

                #[cfg(debug_assertions)]
                log::debug!(
                    "Carousel reached {:?} edge at offset {:.1} of {:.1}",
                    direction,
                    offset,
                    max_offset
                );
            }
        }
    }

    pub fn pointer_enter(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        self.motion.paused = true;
    }

    pub fn pointer_leave(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        self.drag.stop();
        self.motion.paused = false;
    }

    pub fn pointer_down(&mut self, x: f64) {
        let Some(viewport) = self.viewport.as_ref() else {
            return;
        };
        self.drag.start(x, viewport.offset());
        self.motion.paused = true;

        #[cfg(debug_assertions)]
        log::debug!(
            "Carousel drag started at x={:.1}, offset={:.1}",
            x,
            self.drag.anchor_offset
        );
    }

    pub fn pointer_move(&mut self, x: f64) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let Some(target) = self.drag.target_offset(x, self.settings.drag_gain) else {
            return;
        };
        viewport.set_offset(target.clamp(0.0, viewport.max_offset()));
    }

    /// End a drag; hover alone decides whether autoplay resumes
    pub fn pointer_up(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        self.drag.stop();

        #[cfg(debug_assertions)]
        log::debug!("Carousel drag ended, paused={}", self.motion.paused);
    }
}

#[cfg(test)]
#[path = "carousel_controller_tests.rs"]
mod carousel_controller_tests;
