//! `cafe-seating` — the shared seat pool and waiting line.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`line`]      | `WaitingLine` — bounded FIFO with per-member slot positions |
//! | [`allocator`] | `SeatAllocator`, `Seat`, `Departure`                        |
//! | [`error`]     | `SeatingError`, `SeatingResult<T>`                          |
//!
//! # Invariants
//!
//! - An `AgentId` is in at most one of {a seat, the line}.
//! - `line.len() <= max_line_length`.
//! - The line's position map has exactly one entry per member, and each
//!   entry is the slot for that member's current index.
//!
//! Every public mutator restores all three before returning, so no caller
//! ever sees a half-updated line.  [`SeatAllocator::is_consistent`] checks
//! them.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the line position map.   |

pub mod allocator;
pub mod error;
pub mod line;

#[cfg(test)]
mod tests;

pub use allocator::{Departure, Seat, SeatAllocator};
pub use error::{SeatingError, SeatingResult};
pub use line::WaitingLine;
