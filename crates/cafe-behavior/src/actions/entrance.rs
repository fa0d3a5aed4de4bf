use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_spatial::SpatialRegistry;

use super::settle;
use crate::{Behavior, BehaviorError, BehaviorResult, Floor, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Moving,
}

/// Walk from the spawn point to the entrance.
///
/// Fails straight away when the floor has no entrance.
pub struct MoveToEntrance {
    agent: AgentId,
    phase: Phase,
}

impl MoveToEntrance {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: Phase::NotStarted }
    }

    fn step<M: Mover, S: SpatialRegistry>(&mut self, ctx: &mut Floor<M, S>) -> BehaviorResult<Status> {
        match self.phase {
            Phase::NotStarted => {
                let entrance = ctx.spatial.entrance_position().ok_or(BehaviorError::NoEntrance)?;
                ctx.move_to(self.agent, entrance)?;
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

impl<M: Mover, S: SpatialRegistry> Behavior<Floor<M, S>> for MoveToEntrance {
    fn tick(&mut self, ctx: &mut Floor<M, S>) -> Status {
        let result = self.step(ctx);
        settle(self.agent, "move_to_entrance", result)
    }

    fn reset(&mut self) {
        self.phase = Phase::NotStarted;
    }
}
