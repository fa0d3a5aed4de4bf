use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_spatial::SpatialRegistry;
use tracing::warn;

use super::settle;
use crate::{Behavior, BehaviorError, BehaviorResult, Floor, SignalKind, Status};

// ── CheckAvailableSeat ────────────────────────────────────────────────────────

/// Non-blocking probe: take a free seat now or fail.
///
/// Never returns `Running`.  Meant to sit in a `Selector` ahead of
/// `WaitInLine`.
pub struct CheckAvailableSeat {
    agent: AgentId,
}

impl CheckAvailableSeat {
    pub fn new(agent: AgentId) -> Self {
        Self { agent }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        ctx.customer(self.agent)?;
        let seat = ctx.seating.try_assign_seat(self.agent)?;
        ctx.customer_mut(self.agent)?.assigned_seat = Some(seat);
        ctx.emit(self.agent, SignalKind::Seated(seat));
        Ok(Status::Success)
    }
}

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for CheckAvailableSeat {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "check_available_seat", result)
    }

    fn reset(&mut self) {}
}

// ── MoveToSeat ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Moving,
}

/// Walk to the seat the allocator already committed to this customer.
pub struct MoveToSeat {
    agent: AgentId,
    phase: Phase,
}

impl MoveToSeat {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: Phase::NotStarted }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        match self.phase {
            Phase::NotStarted => {
                let Some(seat) = ctx.customer(self.agent)?.assigned_seat else {
                    warn!(agent = %self.agent, "move to seat without an assigned seat");
                    return Err(BehaviorError::NoSeatAssigned(self.agent));
                };
                let position = ctx
                    .seating
                    .seat_position(seat)
                    .ok_or(BehaviorError::UnknownSeat(seat))?;
                ctx.move_to(self.agent, position)?;
                self.phase = Phase::Moving;
                Ok(Status::Running)
            }
            Phase::Moving => {
                if !ctx.has_arrived(self.agent) {
                    return Ok(Status::Running);
                }
                ctx.go_idle(self.agent);
                Ok(Status::Success)
            }
        }
    }
}

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for MoveToSeat {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "move_to_seat", result)
    }

    fn reset(&mut self) {
        self.phase = Phase::NotStarted;
    }
}
