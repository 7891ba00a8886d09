//! newsreel library - terminal landing page with an autoplaying news carousel
//!
//! This library exposes the core functionality of newsreel for testing purposes.

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod layout;
pub mod news;
pub mod notification;
pub mod scroll;
pub mod site;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use carousel::{CarouselController, CarouselEvent, CarouselSettings};
pub use config::Config;
