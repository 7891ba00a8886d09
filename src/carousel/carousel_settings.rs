use std::time::Duration;

use crate::config::CarouselConfig;

pub const DEFAULT_SPEED: f64 = 0.6;
pub const DEFAULT_EDGE_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_DRAG_GAIN: f64 = 2.0;
pub const DEFAULT_EDGE_TOLERANCE: f64 = 1.0;
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Tuning knobs for the carousel motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Columns advanced per display refresh
    pub speed: f64,
    /// Dwell time at each edge before reversing
    pub edge_delay: Duration,
    /// Multiplier applied to pointer travel while dragging
    pub drag_gain: f64,
    /// Distance from an edge that already counts as reaching it
    pub edge_tolerance: f64,
    /// Display refreshes per second
    pub frame_rate: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            edge_delay: DEFAULT_EDGE_DELAY,
            drag_gain: DEFAULT_DRAG_GAIN,
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl From<&CarouselConfig> for CarouselSettings {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            speed: config.speed,
            edge_delay: Duration::from_millis(config.edge_delay_ms),
            drag_gain: config.drag_gain,
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            frame_rate: config.frame_rate,
        }
    }
}
