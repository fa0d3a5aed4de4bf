use cafe_mobility::MobilityError;
use cafe_spatial::SpatialError;
use cafe_spawn::SpawnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("floor plan error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("spawn policy error: {0}")]
    Spawn(#[from] SpawnError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
