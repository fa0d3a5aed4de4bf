//! Planar floor coordinates.
//!
//! `Position` uses `f32` metres on the restaurant floor.  The simulation has
//! no pathfinding, so all geometry reduces to straight-line distances and
//! steps along them.

/// A point on the restaurant floor, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move at most `max_step` toward `target`.
    ///
    /// Returns `target` exactly when it is within reach so callers can
    /// compare positions without float slop.
    pub fn step_towards(self, target: Position, max_step: f32) -> Position {
        let dist = self.distance(target);
        if dist <= max_step || dist <= f32::EPSILON {
            return target;
        }
        let t = max_step / dist;
        Position {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }

    /// `self - direction * distance`, the line-slot formula.
    #[inline]
    pub fn offset_back(self, direction: Position, distance: f32) -> Position {
        Position {
            x: self.x - direction.x * distance,
            y: self.y - direction.y * distance,
        }
    }

    /// `true` when both coordinates are finite (no NaN / infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
