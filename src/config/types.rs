// Configuration type definitions

use serde::Deserialize;

use crate::carousel::CarouselSettings;
use crate::news::NewsItem;
use crate::site::SocialLink;

const MAX_FRAME_RATE: u32 = 240;

fn default_speed() -> f64 {
    CarouselSettings::default().speed
}

fn default_edge_delay_ms() -> u64 {
    CarouselSettings::default().edge_delay.as_millis() as u64
}

fn default_drag_gain() -> f64 {
    CarouselSettings::default().drag_gain
}

fn default_frame_rate() -> u32 {
    CarouselSettings::default().frame_rate
}

/// Carousel motion section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_edge_delay_ms")]
    pub edge_delay_ms: u64,
    #[serde(default = "default_drag_gain")]
    pub drag_gain: f64,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            speed: default_speed(),
            edge_delay_ms: default_edge_delay_ms(),
            drag_gain: default_drag_gain(),
            frame_rate: default_frame_rate(),
        }
    }
}

impl CarouselConfig {
    /// Reset unusable values to their defaults, returning a warning per reset
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.speed.is_finite() || self.speed <= 0.0 {
            warnings.push(format!(
                "carousel.speed must be positive, using {}",
                default_speed()
            ));
            self.speed = default_speed();
        }

        if !self.drag_gain.is_finite() || self.drag_gain <= 0.0 {
            warnings.push(format!(
                "carousel.drag_gain must be positive, using {}",
                default_drag_gain()
            ));
            self.drag_gain = default_drag_gain();
        }

        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            warnings.push(format!(
                "carousel.frame_rate must be 1-{}, using {}",
                MAX_FRAME_RATE,
                default_frame_rate()
            ));
            self.frame_rate = default_frame_rate();
        }

        warnings
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    /// Replaces the built-in news list when non-empty
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Replaces the built-in social links when non-empty
    #[serde(default)]
    pub social: Vec<SocialLink>,
}
