use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::CLEAN_SUFFIX;

/// Threshold used when none is given, in mph.
pub const DEFAULT_MAX_SPEED: f64 = 50.;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Max speed must be a positive number of mph, got {0}")]
    InvalidMaxSpeed(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Print the cleaned points to stdout
    Print,
    /// Save the cleaned points next to the input file
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Gpx,
}

impl InputFormat {
    /// Anything that isn't a `.gpx` file is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gpx") => InputFormat::Gpx,
            _ => InputFormat::Csv,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Gpx => "gpx",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanConfig {
    pub input_path: PathBuf,
    pub output_mode: OutputMode,
    pub max_speed: f64,
    /// Skip the first row of a CSV input
    pub has_headers: bool,
}

impl CleanConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_mode: OutputMode, max_speed: f64) -> Result<Self, ConfigError> {
        if !max_speed.is_finite() || max_speed <= 0. {
            return Err(ConfigError::InvalidMaxSpeed(max_speed));
        }

        Ok(Self {
            input_path: input_path.into(),
            output_mode,
            max_speed,
            has_headers: false,
        })
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn input_format(&self) -> InputFormat {
        InputFormat::from_path(&self.input_path)
    }

    /// Where save mode writes to: `<stem>_clean.<csv|gpx>` next to the input.
    pub fn output_path(&self) -> PathBuf {
        let stem = self
            .input_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{stem}{CLEAN_SUFFIX}.{}", self.input_format().extension());
        self.input_path.with_file_name(file_name)
    }
}
