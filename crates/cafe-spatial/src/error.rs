//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced when validating a floor plan.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error("{what} has a non-finite coordinate")]
    NonFinite { what: String },

    #[error("line direction must be non-zero")]
    ZeroLineDirection,

    #[error("line spacing must be positive and finite, got {0}")]
    InvalidLineSpacing(f32),

    #[error("seats {first} and {second} share the same position")]
    DuplicateSeat { first: usize, second: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
