use thiserror::Error;

/// Why a speed could not be computed between two points.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpeedError {
    #[error("point has a non-finite coordinate or timestamp")]
    NonFinite,
    #[error("timestamp {to} is not after {from}")]
    DegenerateDuration { from: f64, to: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("no input points to filter")]
    MissingInput,
}
