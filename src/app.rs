mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_drag;
mod mouse_events;
mod mouse_hover;
mod mouse_scroll;


// Re-export public types
pub use app_state::App;
