use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_spatial::SpatialRegistry;
use tracing::debug;

use super::settle;
use crate::{Behavior, BehaviorResult, Floor, SignalKind, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ordering,
    WaitingForFood,
}

/// Place an order, then wait for the food.
///
/// Ordering starts the patience timer; serving stops it and starts the
/// meal.  Out of patience at any point means `Failure`.
pub struct TakeOrder {
    agent: AgentId,
    phase: Phase,
}

impl TakeOrder {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: Phase::Ordering }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        let agent = self.agent;
        let eating_secs = ctx.timings.eating_secs;
        let customer = ctx.customer_mut(agent)?;
        if customer.is_out_of_patience() {
            debug!(%agent, "ran out of patience waiting for food");
            return Ok(Status::Failure);
        }

        match self.phase {
            Phase::Ordering => {
                customer.order_placed = true;
                customer.start_patience();
                ctx.emit(agent, SignalKind::OrderPlaced);
                self.phase = Phase::WaitingForFood;
                Ok(Status::Running)
            }
            Phase::WaitingForFood => {
                if !customer.food_served {
                    return Ok(Status::Running);
                }
                customer.stop_patience();
                customer.begin_eating(eating_secs);
                ctx.emit(agent, SignalKind::EatingStarted);
                Ok(Status::Success)
            }
        }
    }
}

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for TakeOrder {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "take_order", result)
    }

    fn reset(&mut self) {
        self.phase = Phase::Ordering;
    }
}
