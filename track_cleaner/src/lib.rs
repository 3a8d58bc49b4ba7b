use std::path::PathBuf;

use thiserror::Error;
use track_cleaner_lib::FilterError;

pub mod config;
pub mod csv_util;
pub mod gpx_util;
mod cleaner;

pub use cleaner::*;
pub use config::ConfigError;

pub const CLEAN_SUFFIX: &str = "_clean";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Sorry but we can't find the file you specified, please check and try again! ({})", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Line {line}: {message}")]
    Parse { line: u64, message: String },
    #[error("Invalid GPX: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
    #[error("GPX point {index} has no usable time: {message}")]
    GpxTime { index: usize, message: String },
}

#[derive(Debug, Error)]
pub enum CleanError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("Timestamp {0} can't be written as a GPX time")]
    Timestamp(f64),
    #[error("Failed to write GPX: {0}")]
    GpxWrite(gpx::errors::GpxError),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
