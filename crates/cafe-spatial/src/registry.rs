//! The `SpatialRegistry` trait — fixed points customers walk between.

use cafe_core::Position;

use crate::FloorPlan;

/// Lookup of the restaurant's fixed landmarks.
///
/// Either landmark may be missing (a floor still being laid out, say).
/// Callers treat `None` as an ordinary failure, never as a fatal error.
pub trait SpatialRegistry {
    /// Where arriving customers first walk to.
    fn entrance_position(&self) -> Option<Position>;

    /// Where leaving customers walk before they despawn.
    fn exit_position(&self) -> Option<Position>;
}

impl SpatialRegistry for FloorPlan {
    #[inline]
    fn entrance_position(&self) -> Option<Position> {
        self.entrance
    }

    #[inline]
    fn exit_position(&self) -> Option<Position> {
        self.exit
    }
}
