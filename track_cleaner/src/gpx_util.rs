use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
    str::FromStr,
};

use chrono::{DateTime, Utc};
use gpx::{Gpx, GpxVersion, Time, Track, TrackSegment, Waypoint};
use time::OffsetDateTime;
use track_cleaner_lib::TrackPoint;

use crate::{CleanError, InputError};

pub fn read_gpx(path: &Path) -> Result<Vec<TrackPoint>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_gpx_from(BufReader::new(file))
}

/// Every track point of every segment, in document order. Points must carry a time.
pub fn read_gpx_from<R: Read>(reader: R) -> Result<Vec<TrackPoint>, InputError> {
    let gpx = gpx::read(reader)?;

    let mut track_points: Vec<TrackPoint> = Vec::new();
    for track in gpx.tracks {
        for segment in track.segments {
            for point in segment.points {
                let index = track_points.len();
                let time = point.time.ok_or_else(|| InputError::GpxTime {
                    index,
                    message: "missing <time>".into(),
                })?;
                let time = DateTime::<Utc>::from_str(&time.format()?).map_err(|err| InputError::GpxTime {
                    index,
                    message: err.to_string(),
                })?;

                let timestamp = time.timestamp() as f64 + time.timestamp_subsec_nanos() as f64 / 1e9;
                track_points.push(TrackPoint::new(point.point().y(), point.point().x(), timestamp));
            }
        }
    }

    Ok(track_points)
}

/// Writes the points as a single GPX 1.1 track.
pub fn write_gpx<W: Write>(points: &[TrackPoint], writer: W) -> Result<(), CleanError> {
    let mut gpx = Gpx::default();
    gpx.version = GpxVersion::Gpx11;

    let mut track = Track::new();
    let mut segment = TrackSegment::new();

    for point in points {
        let nanos = (point.timestamp * 1e9).round() as i128;
        let time = OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| CleanError::Timestamp(point.timestamp))?;

        let mut wp = Waypoint::new(point.position());
        wp.time = Some(Time::from(time));
        segment.points.push(wp);
    }

    track.segments.push(segment);
    gpx.tracks.push(track);

    gpx::write(&gpx, writer).map_err(CleanError::GpxWrite)
}
