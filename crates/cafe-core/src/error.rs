//! Shared error type.
//!
//! Sub-crates define their own error enums; `CafeError` covers the failures
//! that belong to the core types themselves (config validation mostly).

use thiserror::Error;

use crate::{AgentId, SeatId};

/// The top-level error type for `cafe-core`.
#[derive(Debug, Error)]
pub enum CafeError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("seat {0} not found")]
    SeatNotFound(SeatId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cafe-core`.
pub type CafeResult<T> = Result<T, CafeError>;
