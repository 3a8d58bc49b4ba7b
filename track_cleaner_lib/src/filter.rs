use tracing::{debug, warn};

use crate::{error::FilterError, speed::speed, track_point::TrackPoint};

/// Outcome of a filter run. `points` is the cleaned trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub points: Vec<TrackPoint>,
    /// Points dropped for reaching `max_speed`
    pub too_fast: usize,
    /// Points dropped because no speed could be computed for them
    pub invalid: usize,
}

impl FilterReport {
    pub fn rejected(&self) -> usize {
        self.too_fast + self.invalid
    }
}

/// Removes points that could only be reached from the last kept point by going at or above
/// `max_speed` (mph).
///
/// The first point is always kept, and every later point is compared against the most recent
/// point that was kept, not its direct predecessor. The last kept point is always part of the
/// result. Points for which no speed can be computed (time standing still or running backwards,
/// non-finite values) are dropped like any other outlier.
///
/// Filtering is not idempotent: running the result through again with the same `max_speed`
/// may drop more points.
pub fn filter(trajectory: &[TrackPoint], max_speed: f64) -> Result<Vec<TrackPoint>, FilterError> {
    filter_with_report(trajectory, max_speed).map(|report| report.points)
}

pub fn filter_with_report(trajectory: &[TrackPoint], max_speed: f64) -> Result<FilterReport, FilterError> {
    let mut points = Vec::new();
    let mut too_fast = 0;
    let mut invalid = 0;

    let mut last_retained: Option<&TrackPoint> = None;
    for (index, point) in trajectory.iter().enumerate() {
        let Some(retained) = last_retained else {
            last_retained = Some(point);
            continue;
        };

        match speed(retained, point) {
            Ok(speed) if speed < max_speed => {
                points.push(*retained);
                last_retained = Some(point);
            }
            Ok(speed) => {
                debug!("Dropping point {index}: {speed:.2} mph");
                too_fast += 1;
            }
            Err(err) => {
                warn!("Dropping point {index}: {err}");
                invalid += 1;
            }
        }
    }

    // The last kept point is never pushed inside the loop
    let last = last_retained.ok_or(FilterError::MissingInput)?;
    points.push(*last);

    Ok(FilterReport {
        points,
        too_fast,
        invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(points: &[(f64, f64, f64)]) -> Vec<TrackPoint> {
        points.iter().copied().map(TrackPoint::from).collect()
    }

    fn is_subsequence(sub: &[TrackPoint], of: &[TrackPoint]) -> bool {
        let mut rest = of.iter();
        sub.iter().all(|p| rest.any(|q| q == p))
    }

    #[test]
    fn empty_input() {
        assert_eq!(filter(&[], 50.), Err(FilterError::MissingInput));
    }

    #[test]
    fn single_point() {
        let input = track(&[(10., 10., 1000.)]);
        assert_eq!(filter(&input, 50.).unwrap(), input);
        assert_eq!(filter(&input, 0.001).unwrap(), input);
    }

    #[test]
    fn spike_is_compared_against_last_good_point() {
        let input = track(&[(0., 0., 0.), (0., 1., 3600.), (0., 0.1, 7200.)]);
        let report = filter_with_report(&input, 50.).unwrap();
        assert_eq!(report.points, track(&[(0., 0., 0.), (0., 0.1, 7200.)]));
        assert_eq!(report.too_fast, 1);
        assert_eq!(report.invalid, 0);
    }

    #[test]
    fn no_duplicate_trailing_point() {
        let input = track(&[(0., 0., 0.), (0., 0.1, 3600.), (0., 0.2, 7200.)]);
        assert_eq!(filter(&input, 50.).unwrap(), input);
    }

    #[test]
    fn trailing_outliers_keep_last_good_point() {
        let input = track(&[(0., 0., 0.), (0., 0.1, 3600.), (0., 5., 3660.), (0., 10., 3720.)]);
        let result = filter(&input, 50.).unwrap();
        assert_eq!(result, track(&[(0., 0., 0.), (0., 0.1, 3600.)]));
    }

    #[test]
    fn first_point_kept_even_when_everything_else_is_too_fast() {
        let input = track(&[(0., 0., 0.), (0., 10., 60.), (0., 20., 120.)]);
        assert_eq!(filter(&input, 50.).unwrap(), track(&[(0., 0., 0.)]));
    }

    #[test]
    fn threshold_is_exclusive() {
        let input = track(&[(0., 0., 0.), (1., 0., 3600.)]);
        let exact = crate::speed::speed(&input[0], &input[1]).unwrap();

        assert_eq!(filter(&input, exact).unwrap(), track(&[(0., 0., 0.)]));
        assert_eq!(filter(&input, exact + 0.01).unwrap(), input);
    }

    #[test]
    fn degenerate_durations_are_skipped() {
        let input = track(&[
            (0., 0., 0.),
            (0., 0.01, 0.),
            (0., 0.02, -60.),
            (0., 0.03, 3600.),
        ]);
        let report = filter_with_report(&input, 50.).unwrap();
        assert_eq!(report.points, track(&[(0., 0., 0.), (0., 0.03, 3600.)]));
        assert_eq!(report.invalid, 2);
        assert_eq!(report.rejected(), 2);
    }

    #[test]
    fn nan_point_is_skipped() {
        let input = track(&[(0., 0., 0.), (f64::NAN, 0.01, 60.), (0., 0.01, 3600.)]);
        let report = filter_with_report(&input, 50.).unwrap();
        assert_eq!(report.points, track(&[(0., 0., 0.), (0., 0.01, 3600.)]));
        assert_eq!(report.invalid, 1);
    }

    #[test]
    fn standing_still_with_repeated_timestamps_is_kept() {
        let input = track(&[(5., 5., 0.), (5., 5., 0.), (5., 5.01, 3600.)]);
        assert_eq!(filter(&input, 50.).unwrap(), input);
    }

    #[test]
    fn result_is_ordered_subsequence() {
        let input = track(&[
            (55.0, 9.0, 0.),
            (55.001, 9.001, 10.),
            (56.0, 10.0, 20.),
            (55.002, 9.002, 30.),
            (55.003, 9.003, 40.),
            (40.0, 44.0, 50.),
            (55.004, 9.004, 60.),
        ]);
        for max_speed in [1., 10., 50., 100., 1e6] {
            let result = filter(&input, max_speed).unwrap();
            assert!(!result.is_empty());
            assert!(result.len() <= input.len());
            assert!(is_subsequence(&result, &input));
            assert_eq!(result[0], input[0]);
        }
    }

    #[test]
    fn outliers_in_the_middle_are_removed() {
        let input = track(&[
            (55.0, 9.0, 0.),
            (55.001, 9.001, 10.),
            (56.0, 10.0, 20.),
            (55.002, 9.002, 30.),
            (55.003, 9.003, 40.),
            (40.0, 44.0, 50.),
            (55.004, 9.004, 60.),
        ]);
        let result = filter(&input, 100.).unwrap();
        assert_eq!(result.len(), 5);
        assert!(!result.contains(&input[2]));
        assert!(!result.contains(&input[5]));
    }
}
