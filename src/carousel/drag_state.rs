/// Grab-and-drag state for the news strip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub active: bool,

    /// Pointer column (relative to the strip) where the drag started
    pub anchor_pointer_x: f64,

    /// Strip offset when the drag started
    pub anchor_offset: f64,
}

impl DragState {
    pub fn start(&mut self, pointer_x: f64, offset: f64) {
        self.active = true;
        self.anchor_pointer_x = pointer_x;
        self.anchor_offset = offset;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Offset the strip should take for a pointer at `pointer_x`
    ///
    /// Moving the pointer right pulls the content right, so the offset drops.
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn target_offset(&self, pointer_x: f64, gain: f64) -> Option<f64> {
        if !self.active {
            return None;
        }

        let delta = (pointer_x - self.anchor_pointer_x) * gain;
        Some(self.anchor_offset - delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.active);
        assert_eq!(state.target_offset(10.0, 2.0), None);
    }

    #[test]
    fn start_drag_captures_anchors() {
        let mut state = DragState::default();
        state.start(100.0, 200.0);

        assert!(state.active);
        assert_eq!(state.anchor_pointer_x, 100.0);
        assert_eq!(state.anchor_offset, 200.0);
    }

    #[test]
    fn dragging_left_increases_offset() {
        let mut state = DragState::default();
        state.start(100.0, 200.0);

        assert_eq!(state.target_offset(60.0, 2.0), Some(280.0));
    }

    #[test]
    fn dragging_right_decreases_offset() {
        let mut state = DragState::default();
        state.start(10.0, 50.0);

        assert_eq!(state.target_offset(20.0, 2.0), Some(30.0));
    }

    #[test]
    fn stop_ends_drag() {
        let mut state = DragState::default();
        state.start(10.0, 50.0);
        state.stop();

        assert!(!state.active);
        assert_eq!(state.target_offset(20.0, 2.0), None);
    }
}
