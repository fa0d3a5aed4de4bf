//! Per-agent movement state.

use cafe_core::{Animation, Position};

/// The movement state for a single agent.
///
/// An agent is either **stationary** (`in_transit = false`, `position ==
/// destination`) or **walking** toward `destination`.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Where the agent currently stands.
    pub position: Position,

    /// The latest commanded target.  Equals `position` when stationary.
    pub destination: Position,

    /// `true` while the agent is walking to `destination`.
    pub in_transit: bool,

    /// Animation intent for the presentation layer.
    pub animation: Animation,
}

impl MovementState {
    /// Construct a stationary, idle state at `position`.
    #[inline]
    pub fn stationary(position: Position) -> Self {
        Self {
            position,
            destination: position,
            in_transit:  false,
            animation:   Animation::Idle,
        }
    }

    /// Straight-line distance left to walk.
    #[inline]
    pub fn remaining(&self) -> f32 {
        if self.in_transit {
            self.position.distance(self.destination)
        } else {
            0.0
        }
    }
}
