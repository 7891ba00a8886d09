//! News content and the horizontally scrolling card strip

mod news_item;
pub mod news_render;

pub use news_item::{NewsItem, default_news};

#[cfg(test)]
#[path = "news/news_render_tests.rs"]
mod news_render_tests;
