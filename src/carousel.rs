//! News carousel motion control
//!
//! The [`CarouselController`] owns the news strip viewport while it is mounted
//! and moves it back and forth between its two extremes, one step per display
//! refresh. Pointer hover pauses the motion, pointer drag takes over the
//! offset entirely, and a one-shot edge timer reverses direction after a
//! dwell at each end.
//!
//! All state has a single owner and is mutated only from the terminal event
//! loop, either through the direct pointer methods or through
//! [`CarouselEvent`] messages.

mod carousel_controller;
mod carousel_events;
mod carousel_settings;
mod drag_state;
mod edge_timer;
mod frame_loop;
mod motion_state;

pub use carousel_controller::{CarouselController, CarouselPhase};
pub use carousel_events::CarouselEvent;
pub use carousel_settings::CarouselSettings;
pub use drag_state::DragState;
pub use edge_timer::EdgeTimer;
pub use frame_loop::FrameLoop;
pub use motion_state::{Direction, MotionState};
