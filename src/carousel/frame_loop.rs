use std::time::{Duration, Instant};

/// Handle to the repeating per-refresh task that drives autoplay
///
/// The event loop asks how long it may block on input before the next
/// refresh is due, and advances the handle each time it runs a frame. Missed
/// refreshes are coalesced into one, the way a display refresh callback
/// would be, so a stalled loop never replays a burst of ticks.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    interval: Duration,
    next_frame: Instant,
    cancelled: bool,
}

impl FrameLoop {
    /// Start a loop whose first refresh is due immediately
    pub fn start(now: Instant, frame_rate: u32) -> Self {
        let frame_rate = frame_rate.max(1);
        Self {
            interval: Duration::from_secs(1) / frame_rate,
            next_frame: now,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.next_frame
    }

    /// Record that a frame ran at `now` and schedule the following one
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
    }

    /// Time until the next refresh, `None` once cancelled
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(self.next_frame.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let now = Instant::now();
        let frames = FrameLoop::start(now, 60);

        assert!(frames.is_due(now));
        assert_eq!(frames.time_until_next(now), Some(Duration::ZERO));
    }

    #[test]
    fn test_interval_from_frame_rate() {
        let frames = FrameLoop::start(Instant::now(), 50);
        assert_eq!(frames.interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_frame_rate_is_treated_as_one() {
        let frames = FrameLoop::start(Instant::now(), 0);
        assert_eq!(frames.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_advance_schedules_next_interval() {
        let start = Instant::now();
        let mut frames = FrameLoop::start(start, 50);

        frames.advance(start);
        assert!(!frames.is_due(start + Duration::from_millis(19)));
        assert!(frames.is_due(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_advance_coalesces_missed_frames() {
        let start = Instant::now();
        let mut frames = FrameLoop::start(start, 50);

        // Loop stalled for ten intervals
        let late = start + Duration::from_millis(200);
        frames.advance(late);

        assert!(!frames.is_due(late));
        assert_eq!(
            frames.time_until_next(late),
            Some(Duration::from_millis(20))
        );
    }

    #[test]
    fn test_cancelled_loop_is_never_due() {
        let start = Instant::now();
        let mut frames = FrameLoop::start(start, 60);

        frames.cancel();
        assert!(!frames.is_active());
        assert!(!frames.is_due(start + Duration::from_secs(5)));
        assert_eq!(frames.time_until_next(start), None);
    }
}
