//! Bisection search for angle-target crossings.
//!
//! Given an angle function of time sampled through the ephemeris
//! provider, finds the instant within a forward horizon where the
//! function crosses a target value, to within one minute.

use chrono::Duration;
use panchangam_angle::is_between;
use panchangam_ephem::EphemerisError;
use panchangam_time::TimeInstant;

/// Width at which bisection stops.
fn precision() -> Duration {
    Duration::minutes(1)
}

/// Find the instant in `[start, start + horizon]` where `f` crosses
/// `target_deg`, to within one minute; returns the left endpoint of the
/// final bracket.
///
/// Precondition: `f` crosses the target at most once in the horizon.
/// Valid for Sun/Moon angular rates over 24-48h horizons; callers pick
/// horizons short enough to hold it. Returns `Ok(None)` when the
/// horizon endpoints do not bracket the target; the caller owns the
/// fallback policy. Wraparound through 0 degrees is handled by arc
/// membership, not signed differences.
pub fn find_angle_crossing<F>(
    f: F,
    target_deg: f64,
    start: TimeInstant,
    horizon: Duration,
) -> Result<Option<TimeInstant>, EphemerisError>
where
    F: Fn(TimeInstant) -> Result<f64, EphemerisError>,
{
    let mut left = start;
    let mut right = start + horizon;
    let mut left_val = f(left)?;
    let right_val = f(right)?;

    if !is_between(target_deg, left_val, right_val) {
        return Ok(None);
    }

    while right - left > precision() {
        let mid = left + (right - left) / 2;
        let mid_val = f(mid)?;
        if is_between(target_deg, left_val, mid_val) {
            right = mid;
        } else {
            left = mid;
            left_val = mid_val;
        }
    }

    Ok(Some(left))
}
