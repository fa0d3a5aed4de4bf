use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("arrival parse error: {0}")]
    Parse(String),

    #[error("invalid arrival #{index}: {reason}")]
    InvalidArrival { index: usize, reason: String },

    #[error("invalid spawn policy: {0}")]
    InvalidPolicy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpawnResult<T> = Result<T, SpawnError>;
