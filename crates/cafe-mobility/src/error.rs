use cafe_core::{AgentId, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {0} has not been placed on the floor")]
    NotPlaced(AgentId),

    #[error("cannot place agent {agent} at non-finite position {position}")]
    NonFinitePosition { agent: AgentId, position: Position },
}

pub type MobilityResult<T> = Result<T, MobilityError>;
