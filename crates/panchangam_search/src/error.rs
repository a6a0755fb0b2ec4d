//! Error type for snapshot computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchangam_ephem::EphemerisError;
use panchangam_time::TimeError;

/// Errors surfaced by [`compute_daily`](crate::compute_daily) and
/// [`compute_weekly`](crate::compute_weekly).
///
/// A solver that fails to bracket a crossing is not represented here;
/// the angam calculators recover locally with a linear-rate estimate and
/// mark the result via its `estimated` flag.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangamError {
    /// Latitude or longitude outside physical range, or a degenerate
    /// (zero-length or reversed) sunrise-sunset interval.
    InvalidLocation(&'static str),
    /// Timezone identifier could not be resolved.
    InvalidTimezone(String),
    /// The ephemeris provider could not answer.
    Ephemeris(EphemerisError),
}

impl Display for PanchangamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidTimezone(name) => write!(f, "invalid timezone: {name}"),
            Self::Ephemeris(err) => write!(f, "ephemeris error: {err}"),
        }
    }
}

impl Error for PanchangamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EphemerisError> for PanchangamError {
    fn from(err: EphemerisError) -> Self {
        Self::Ephemeris(err)
    }
}

impl From<TimeError> for PanchangamError {
    fn from(err: TimeError) -> Self {
        match err {
            TimeError::InvalidTimezone(name) => Self::InvalidTimezone(name),
            _ => Self::InvalidLocation("local time unrepresentable in zone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_error_maps_into_snapshot_error() {
        let bad_zone = TimeError::InvalidTimezone("Not/AZone".to_string());
        assert_eq!(
            PanchangamError::from(bad_zone),
            PanchangamError::InvalidTimezone("Not/AZone".to_string()),
        );

        let gap = TimeError::NonexistentLocalTime("2026-03-08 02:30".to_string());
        assert!(matches!(
            PanchangamError::from(gap),
            PanchangamError::InvalidLocation(_),
        ));
    }
}
