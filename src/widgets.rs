pub mod popup;
pub mod scrollbar;
pub mod viewport_blit;
