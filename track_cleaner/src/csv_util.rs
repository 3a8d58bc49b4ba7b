use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use track_cleaner_lib::TrackPoint;

use crate::InputError;

const COLUMNS: [&str; 3] = ["latitude", "longitude", "timestamp"];

pub fn read_csv(path: &Path, has_headers: bool) -> Result<Vec<TrackPoint>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_from(BufReader::new(file), has_headers)
}

/// Reads `latitude, longitude, timestamp` rows. Extra columns are ignored.
pub fn read_csv_from<R: Read>(reader: R, has_headers: bool) -> Result<Vec<TrackPoint>, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut track_points = Vec::new();
    for record in reader.records() {
        track_points.push(parse_record(&record?)?);
    }

    Ok(track_points)
}

fn parse_record(record: &StringRecord) -> Result<TrackPoint, InputError> {
    let line = record.position().map(|pos| pos.line()).unwrap_or_default();

    // Positional, so header names never have to match the field names
    let point: TrackPoint = record.deserialize(None).map_err(|err| match err.kind() {
        ErrorKind::Deserialize { err: field_err, .. } => InputError::Parse {
            line,
            message: match field_err.field().and_then(|field| COLUMNS.get(field as usize)) {
                Some(column) => format!("{column} is not a number"),
                None => field_err.to_string(),
            },
        },
        _ => InputError::Csv(err),
    })?;

    let values = [point.latitude, point.longitude, point.timestamp];
    if let Some((column, _)) = COLUMNS.iter().zip(values).find(|(_, value)| !value.is_finite()) {
        return Err(InputError::Parse {
            line,
            message: format!("{column} is not a finite number"),
        });
    }

    Ok(point)
}

/// Writes one `<lat>, <lon>, <timestamp>` line per point.
pub fn write_points<W: Write>(points: &[TrackPoint], mut writer: W) -> std::io::Result<()> {
    for point in points {
        writeln!(writer, "{}, {}, {}", point.latitude, point.longitude, point.timestamp)?;
    }
    writer.flush()
}
