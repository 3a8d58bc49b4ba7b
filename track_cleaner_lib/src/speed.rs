use crate::{error::SpeedError, track_point::TrackPoint};

const MINUTES_PER_DEGREE: f64 = 60.;
const MILES_PER_MINUTE: f64 = 1.1515; // Statute miles per minute of arc
const SECONDS_PER_HOUR: f64 = 3600.;

/// Great-circle distance in statute miles, using the spherical law of cosines.
pub fn distance(a: &TrackPoint, b: &TrackPoint) -> f64 {
    if a.latitude == b.latitude && a.longitude == b.longitude {
        return 0.;
    }

    let theta = (a.longitude - b.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let cos_arg = f64::sin(lat_a) * f64::sin(lat_b) + f64::cos(lat_a) * f64::cos(lat_b) * f64::cos(theta);

    // Rounding can push the argument of very close points just outside [-1, 1]
    let degrees = f64::acos(cos_arg.clamp(-1., 1.)).to_degrees();

    degrees * MINUTES_PER_DEGREE * MILES_PER_MINUTE
}

/// Average speed in miles per hour needed to travel from `a` to `b`.
///
/// Points at the same coordinates always give a speed of 0. Otherwise `b` must be
/// strictly later than `a`.
pub fn speed(a: &TrackPoint, b: &TrackPoint) -> Result<f64, SpeedError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(SpeedError::NonFinite);
    }

    let distance = distance(a, b);
    if distance == 0. {
        return Ok(0.);
    }

    let hours = (b.timestamp - a.timestamp) / SECONDS_PER_HOUR;
    if hours <= 0. {
        return Err(SpeedError::DegenerateDuration {
            from: a.timestamp,
            to: b.timestamp,
        });
    }

    Ok(distance / hours)
}
