//! The customer's leaf actions.
//!
//! Every leaf holds the `AgentId` of the customer it drives and nothing
//! else from the world; state lives on the [`Floor`](crate::Floor).  Each
//! leaf is a small state machine with an explicit phase enum, and `reset`
//! puts it back at its first phase.

mod entrance;
mod leave;
mod line;
mod order;
mod payment;
mod seat;

pub use entrance::MoveToEntrance;
pub use leave::Leave;
pub use line::WaitInLine;
pub use order::TakeOrder;
pub use payment::Payment;
pub use seat::{CheckAvailableSeat, MoveToSeat};

use cafe_core::AgentId;
use tracing::debug;

use crate::{BehaviorResult, Status};

/// Absorbs float drift when summing `delta_secs` into an interval timer.
pub(crate) const TIMER_EPSILON: f64 = 1e-9;

/// Turn a leaf's fallible step into a tree status.
fn settle(agent: AgentId, action: &'static str, result: BehaviorResult<Status>) -> Status {
    result.unwrap_or_else(|err| {
        debug!(%agent, action, %err, "action failed");
        Status::Failure
    })
}
