mod scroll_state;
mod scroll_trait;
mod strip_scroll;

pub use scroll_state::ScrollState;
pub use scroll_trait::Viewport;
pub use strip_scroll::StripScroll;

#[cfg(test)]
#[path = "scroll/scroll_state_tests.rs"]
mod scroll_state_tests;

#[cfg(test)]
#[path = "scroll/strip_scroll_tests.rs"]
mod strip_scroll_tests;
