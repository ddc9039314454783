//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `sir-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f64),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
