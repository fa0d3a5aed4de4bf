//! `WaitInLine` — queue for a seat until one frees up or patience runs out.

use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_seating::SeatingError;
use cafe_spatial::SpatialRegistry;
use tracing::{debug, trace};

use super::{TIMER_EPSILON, settle};
use crate::{Behavior, BehaviorResult, Floor, SignalKind, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    JoiningQueue,
    WaitingInQueue,
    MovingInQueue,
}

/// Join the line, shuffle forward as it moves, and take a seat once at the
/// head.
///
/// Patience is checked before anything else on every tick and only starts
/// draining once the customer is standing in its slot.  The head polls for
/// a free seat every `poll_interval_secs`; a successful poll seats the
/// customer and removes it from the line in one allocator call, so
/// `MoveToSeat` finds the seat already committed.
pub struct WaitInLine {
    agent:        AgentId,
    phase:        Phase,
    poll_elapsed: f64,
}

impl WaitInLine {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: Phase::JoiningQueue, poll_elapsed: 0.0 }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        let agent = self.agent;
        if ctx.customer(agent)?.is_out_of_patience() {
            debug!(%agent, "ran out of patience in line");
            return Ok(Status::Failure);
        }

        match self.phase {
            Phase::JoiningQueue => {
                let slot = ctx.seating.join_line(agent)?;
                ctx.move_to(agent, slot)?;
                ctx.customer_mut(agent)?.queue_position = Some(slot);
                ctx.emit(agent, SignalKind::JoinedLine(slot));
                self.phase = Phase::WaitingInQueue;
                self.poll_elapsed = 0.0;
                Ok(Status::Running)
            }
            Phase::WaitingInQueue => self.wait(ctx),
            Phase::MovingInQueue => {
                if ctx.has_arrived(agent) {
                    self.phase = Phase::WaitingInQueue;
                    self.poll_elapsed = 0.0;
                }
                Ok(Status::Running)
            }
        }
    }

    fn wait<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        let agent = self.agent;
        let Some(slot) = ctx.seating.line_position(agent) else {
            debug!(%agent, "no longer in line");
            return Ok(Status::Failure);
        };

        // The line moved up since we last walked.
        if ctx.customer(agent)?.queue_position != Some(slot) {
            ctx.move_to(agent, slot)?;
            ctx.customer_mut(agent)?.queue_position = Some(slot);
            self.phase = Phase::MovingInQueue;
            return Ok(Status::Running);
        }

        if !ctx.has_arrived(agent) {
            return Ok(Status::Running);
        }

        ctx.customer_mut(agent)?.start_patience();
        ctx.go_idle(agent);

        self.poll_elapsed += ctx.delta_secs;
        if self.poll_elapsed + TIMER_EPSILON < ctx.timings.poll_interval_secs {
            return Ok(Status::Running);
        }
        self.poll_elapsed = 0.0;

        if ctx.seating.peek_line_head() != Some(agent) || !ctx.seating.has_free_seat() {
            trace!(%agent, "polled line, nothing yet");
            return Ok(Status::Running);
        }

        match ctx.seat_line_head(agent) {
            Ok(seat) => {
                let customer = ctx.customer_mut(agent)?;
                customer.stop_patience();
                customer.assigned_seat = Some(seat);
                customer.queue_position = None;
                ctx.emit(agent, SignalKind::Seated(seat));
                Ok(Status::Success)
            }
            Err(SeatingError::AssignmentInProgress) => {
                // Someone else took this tick's assignment; poll again next tick.
                self.poll_elapsed = ctx.timings.poll_interval_secs;
                Ok(Status::Running)
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for WaitInLine {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "wait_in_line", result)
    }

    fn reset(&mut self) {
        self.phase = Phase::JoiningQueue;
        self.poll_elapsed = 0.0;
    }
}
