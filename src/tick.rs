/// Direction the moving circle travels along x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards larger x (+1)
    #[default]
    Forward,
    /// Towards smaller x (-1)
    Backward,
}

impl Direction {
    /// Signed step applied on each tick.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Position and heading of the moving circle.
///
/// The position always stays on the track `0..=max_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub position_x: i32,
    pub direction: Direction,
}

impl AnimationState {
    pub fn new(position_x: i32) -> Self {
        Self {
            position_x,
            direction: Direction::Forward,
        }
    }

    /// Moves one step and reverses once the end of the track is reached.
    ///
    /// Returns `true` when the direction flipped on this step.
    pub fn advance(&mut self, max_x: i32) -> bool {
        self.position_x = self
            .position_x
            .saturating_add(self.direction.step())
            .clamp(0, max_x.max(0));

        let at_end = match self.direction {
            Direction::Forward => self.position_x >= max_x,
            Direction::Backward => self.position_x <= 0,
        };
        if at_end {
            self.direction = self.direction.reversed();
        }
        at_end
    }
}

// A tick result tells the host what to do after an event has been handled
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Did observable state change, so the canvas must be repainted
    pub needs_redraw: bool,
}

impl TickResult {
    pub fn redraw() -> Self {
        Self { needs_redraw: true }
    }

    pub fn unchanged() -> Self {
        Self { needs_redraw: false }
    }
}
