use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_spatial::SpatialRegistry;

use super::{TIMER_EPSILON, settle};
use crate::{Behavior, BehaviorResult, Floor, SignalKind, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Eating,
    ProcessingPayment,
    Done,
}

/// Wait for the meal to end, then spend `payment_secs` paying.
pub struct Payment {
    agent:   AgentId,
    phase:   Phase,
    elapsed: f64,
}

impl Payment {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: Phase::Eating, elapsed: 0.0 }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        match self.phase {
            Phase::Eating => {
                if ctx.customer(self.agent)?.eating_finished {
                    self.phase = Phase::ProcessingPayment;
                    self.elapsed = 0.0;
                }
                Ok(Status::Running)
            }
            Phase::ProcessingPayment => {
                self.elapsed += ctx.delta_secs;
                if self.elapsed + TIMER_EPSILON < ctx.timings.payment_secs {
                    return Ok(Status::Running);
                }
                ctx.customer_mut(self.agent)?.payment_done = true;
                ctx.emit(self.agent, SignalKind::PaymentDone);
                self.phase = Phase::Done;
                Ok(Status::Success)
            }
            Phase::Done => Ok(Status::Success),
        }
    }
}

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for Payment {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "payment", result)
    }

    fn reset(&mut self) {
        self.phase = Phase::Eating;
        self.elapsed = 0.0;
    }
}
