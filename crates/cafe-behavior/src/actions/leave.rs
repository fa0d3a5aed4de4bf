//! `Leave` — give back whatever is held, walk out, ask to be despawned.

use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_spatial::SpatialRegistry;
use tracing::{debug, warn};

use super::settle;
use crate::{Behavior, BehaviorResult, Floor, SignalKind, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    PreparingToLeave,
    Moving,
    Left,
}

/// Terminal action of every path through the customer tree.
///
/// The release step runs once per activation: it drops the customer's
/// line slot (if still queued) and its seat (if seated).  A floor without
/// an exit skips the walk.  On the way out a customer that never paid
/// raises `Abandoned` ahead of `Despawn`.
pub struct Leave {
    agent:    AgentId,
    phase:    Phase,
    released: bool,
}

impl Leave {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: Phase::PreparingToLeave, released: false }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        let agent = self.agent;
        match self.phase {
            Phase::PreparingToLeave => {
                if !self.released {
                    self.release(ctx);
                }
                match ctx.spatial.exit_position() {
                    Some(exit) => {
                        ctx.move_to(agent, exit)?;
                        self.phase = Phase::Moving;
                        Ok(Status::Running)
                    }
                    None => {
                        warn!(%agent, "floor has no exit, leaving in place");
                        self.finish(ctx)
                    }
                }
            }
            Phase::Moving => {
                if !ctx.has_arrived(agent) {
                    return Ok(Status::Running);
                }
                ctx.go_idle(agent);
                self.finish(ctx)
            }
            Phase::Left => Ok(Status::Success),
        }
    }

    fn release<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) {
        let agent = self.agent;
        let departure = ctx.abandon(agent);
        self.released = true;
        if let Some(customer) = ctx.registry.get_mut(agent) {
            customer.stop_patience();
            customer.leaving = true;
            customer.assigned_seat = None;
            customer.queue_position = None;
        }
        debug!(
            %agent,
            left_line = departure.left_line,
            seat = ?departure.released_seat,
            "released floor resources",
        );
    }

    fn finish<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        let agent = self.agent;
        let customer = ctx.customer_mut(agent)?;
        customer.despawn_requested = true;
        if !customer.payment_done {
            ctx.emit(agent, SignalKind::Abandoned);
        }
        ctx.emit(agent, SignalKind::Despawn);
        self.phase = Phase::Left;
        Ok(Status::Success)
    }
}

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for Leave {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "leave", result)
    }

    fn reset(&mut self) {
        self.phase = Phase::PreparingToLeave;
        self.released = false;
    }
}
