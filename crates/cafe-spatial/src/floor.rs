//! Floor plan: landmark positions, the seat pool, and the waiting line.
//!
//! # Line geometry
//!
//! The line grows backwards from `origin` along `direction`:
//!
//! ```text
//! slot(i) = origin - unit(direction) * (i * spacing)
//! ```
//!
//! Slot 0 is the head of the line, the spot closest to the seats.

use cafe_core::Position;

use crate::{SpatialError, SpatialResult};

// ── LineLayout ────────────────────────────────────────────────────────────────

/// Geometry of the waiting line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineLayout {
    /// Position of the line head (slot 0).
    pub origin: Position,
    /// The line extends *against* this vector.  Need not be normalized.
    pub direction: Position,
    /// Distance between consecutive slots, in metres.
    pub spacing: f32,
}

impl LineLayout {
    /// Position of slot `index` (0 = head).
    pub fn slot(&self, index: usize) -> Position {
        let len = self.direction.x.hypot(self.direction.y);
        let unit = if len > f32::EPSILON {
            Position::new(self.direction.x / len, self.direction.y / len)
        } else {
            Position::ORIGIN
        };
        self.origin.offset_back(unit, index as f32 * self.spacing)
    }

    pub fn validate(&self) -> SpatialResult<()> {
        if !self.origin.is_finite() {
            return Err(SpatialError::NonFinite { what: "line origin".into() });
        }
        if !self.direction.is_finite() {
            return Err(SpatialError::NonFinite { what: "line direction".into() });
        }
        if self.direction.x.hypot(self.direction.y) <= f32::EPSILON {
            return Err(SpatialError::ZeroLineDirection);
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(SpatialError::InvalidLineSpacing(self.spacing));
        }
        Ok(())
    }
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            origin:    Position::new(2.0, 0.0),
            direction: Position::new(0.0, 1.0),
            spacing:   1.0,
        }
    }
}

// ── FloorPlan ─────────────────────────────────────────────────────────────────

/// Every fixed position in one restaurant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FloorPlan {
    /// Where new customers appear.
    pub spawn: Position,
    /// First stop of every customer.  `None` makes every arrival leave.
    pub entrance: Option<Position>,
    /// Last stop before despawn.
    pub exit: Option<Position>,
    /// Seat positions; seat `i` is `SeatId(i)`.
    pub seats: Vec<Position>,
    pub line: LineLayout,
}

impl FloorPlan {
    /// A plan with `n` seats spaced 1.5 m apart along `y = 5`.
    pub fn with_seats(n: usize) -> Self {
        let seats = (0..n)
            .map(|i| Position::new(-2.0 + i as f32 * 1.5, 5.0))
            .collect();
        Self { seats, ..Self::default() }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Check every position is finite, the line is well-formed, and no two
    /// seats overlap.
    pub fn validate(&self) -> SpatialResult<()> {
        let landmarks = [("spawn", Some(self.spawn)), ("entrance", self.entrance), ("exit", self.exit)];
        for (what, pos) in landmarks {
            if let Some(p) = pos
                && !p.is_finite()
            {
                return Err(SpatialError::NonFinite { what: what.into() });
            }
        }

        for (i, seat) in self.seats.iter().enumerate() {
            if !seat.is_finite() {
                return Err(SpatialError::NonFinite { what: format!("seat {i}") });
            }
            if let Some(j) = self.seats[..i].iter().position(|other| other == seat) {
                return Err(SpatialError::DuplicateSeat { first: j, second: i });
            }
        }

        self.line.validate()
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            spawn:    Position::new(0.0, -6.0),
            entrance: Some(Position::new(0.0, -1.0)),
            exit:     Some(Position::new(-4.0, -6.0)),
            seats:    Vec::new(),
            line:     LineLayout::default(),
        }
    }
}
