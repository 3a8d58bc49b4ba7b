use std::{io::Write, path::PathBuf};

use tracing::{debug, info};
use track_cleaner_lib::{filter_with_report, FilterReport, TrackPoint};

use crate::{
    config::{CleanConfig, InputFormat, OutputMode},
    csv_util, gpx_util, CleanError, InputError,
};

/// What a finished run did.
#[derive(Debug)]
pub struct CleanSummary {
    pub input_points: usize,
    pub report: FilterReport,
    /// Set in save mode
    pub saved_to: Option<PathBuf>,
}

pub fn load_track_points(config: &CleanConfig) -> Result<Vec<TrackPoint>, InputError> {
    if !config.input_path.exists() {
        return Err(InputError::NotFound(config.input_path.clone()));
    }

    match config.input_format() {
        InputFormat::Csv => csv_util::read_csv(&config.input_path, config.has_headers),
        InputFormat::Gpx => gpx_util::read_gpx(&config.input_path),
    }
}

/// Loads, filters and emits the track described by `config`. In print mode the cleaned points
/// go to `out`; in save mode they are written next to the input, and only once filtering has
/// succeeded.
pub fn run<W: Write>(config: &CleanConfig, out: W) -> Result<CleanSummary, CleanError> {
    let track_points = load_track_points(config)?;
    info!("Loaded {} points from {}", track_points.len(), config.input_path.display());

    let report = filter_with_report(&track_points, config.max_speed)?;
    info!(
        "Kept {} of {} points ({} over {} mph, {} invalid)",
        report.points.len(),
        track_points.len(),
        report.too_fast,
        config.max_speed,
        report.invalid,
    );

    let saved_to = match config.output_mode {
        OutputMode::Print => {
            csv_util::write_points(&report.points, out)?;
            None
        }
        OutputMode::Save => Some(save(config, &report.points)?),
    };

    Ok(CleanSummary {
        input_points: track_points.len(),
        report,
        saved_to,
    })
}

fn save(config: &CleanConfig, points: &[TrackPoint]) -> Result<PathBuf, CleanError> {
    let mut buf = Vec::new();
    match config.input_format() {
        InputFormat::Csv => csv_util::write_points(points, &mut buf)?,
        InputFormat::Gpx => gpx_util::write_gpx(points, &mut buf)?,
    }

    let path = config.output_path();
    std::fs::write(&path, buf)?;
    debug!("Wrote {} points to {}", points.len(), path.display());

    Ok(path)
}
