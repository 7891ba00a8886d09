/// Direction of autonomous travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards the maximum offset
    #[default]
    Forward,
    /// Towards offset zero
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Autoplay flags
///
/// `paused` and `waiting_at_edge` are independent; motion only advances when
/// both are clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionState {
    pub direction: Direction,
    pub paused: bool,
    pub waiting_at_edge: bool,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_advance(&self) -> bool {
        !self.paused && !self.waiting_at_edge
    }
}
