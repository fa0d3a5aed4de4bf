use cafe_core::{AgentId, SeatId};
use thiserror::Error;

/// Why an allocator request was refused.
///
/// None of these are fatal.  Behavior code turns every one of them into an
/// ordinary `Failure` and lets the tree fall back.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeatingError {
    #[error("no free seat")]
    NoFreeSeat,

    #[error("a seat assignment already ran this tick")]
    AssignmentInProgress,

    #[error("waiting line is full ({capacity} customers)")]
    LineFull { capacity: usize },

    #[error("agent {agent} already holds {seat}")]
    AlreadySeated { agent: AgentId, seat: SeatId },

    #[error("agent {0} is already in the line")]
    AlreadyInLine(AgentId),

    #[error("agent {0} is not in the line")]
    NotInLine(AgentId),

    #[error("agent {agent} is not at the head of the line (head is {head})")]
    NotLineHead { agent: AgentId, head: AgentId },

    #[error("seat {0} does not exist")]
    UnknownSeat(SeatId),
}

pub type SeatingResult<T> = Result<T, SeatingError>;
