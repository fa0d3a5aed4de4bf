use cafe_core::{AgentId, SeatId};
use cafe_seating::SeatingError;
use thiserror::Error;

/// Why a leaf could not make progress.
///
/// Leaves never return this to the tree; they log it and report `Failure`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("customer {0} is not in the registry")]
    UnknownCustomer(AgentId),

    #[error("the floor has no entrance")]
    NoEntrance,

    #[error("customer {0} has no seat assigned")]
    NoSeatAssigned(AgentId),

    #[error("seat {0} is not on this floor")]
    UnknownSeat(SeatId),

    #[error(transparent)]
    Seating(#[from] SeatingError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
