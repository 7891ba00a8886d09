/// A horizontally scrollable surface driven by the carousel controller
///
/// Implementors own the offset and are free to clamp writes to
/// `[0, max_offset]`; callers must not rely on out-of-range writes sticking.
pub trait Viewport {
    /// Current scroll offset (never negative)
    fn offset(&self) -> f64;

    /// Move the viewport to `offset`
    fn set_offset(&mut self, offset: f64);

    /// Total width of the scrolled content
    fn content_extent(&self) -> f64;

    /// Width of the visible window onto the content
    fn visible_extent(&self) -> f64;

    /// Largest reachable offset, floored at zero when the content fits
    fn max_offset(&self) -> f64 {
        (self.content_extent() - self.visible_extent()).max(0.0)
    }
}
