/// Input delivered to the carousel from the host event loop
///
/// Pointer positions are columns relative to the strip's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// A display refresh
    Tick,
    PointerEnter,
    PointerLeave,
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp,
}
