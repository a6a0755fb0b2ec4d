//! The ephemeris provider trait and geographic location type.

use chrono::NaiveDate;
use chrono_tz::Tz;
use panchangam_time::TimeInstant;
use serde::Serialize;

use crate::error::EphemerisError;

/// A geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Whether both coordinates are within physical range.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
    }
}

/// Source of Sun/Moon positions and rise/set instants.
///
/// Longitudes are ecliptic, geocentric, apparent, in degrees [0, 360).
/// Sunrise/sunset are the solar disc center crossing the horizon at the
/// given location. Implementations holding non-reentrant internal state
/// must be synchronized by the caller (one instance per worker, or a
/// mutex around calls); the stubs in this crate are pure.
pub trait EphemerisProvider {
    /// Sun's ecliptic longitude at `instant`, degrees [0, 360).
    fn sun_longitude(&self, instant: TimeInstant) -> Result<f64, EphemerisError>;

    /// Moon's ecliptic longitude at `instant`, degrees [0, 360).
    fn moon_longitude(&self, instant: TimeInstant) -> Result<f64, EphemerisError>;

    /// Sunrise instant for `date` at `location`, expressed in `tz`.
    fn sunrise(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz: Tz,
    ) -> Result<TimeInstant, EphemerisError>;

    /// Sunset instant for `date` at `location`, expressed in `tz`.
    fn sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz: Tz,
    ) -> Result<TimeInstant, EphemerisError>;

    /// Moon−Sun elongation at `instant`, degrees [0, 360). Thithi/karanam basis.
    fn moon_sun_angle(&self, instant: TimeInstant) -> Result<f64, EphemerisError> {
        let moon = self.moon_longitude(instant)?;
        let sun = self.sun_longitude(instant)?;
        Ok(panchangam_angle::normalize_360(moon - sun))
    }

    /// Sun+Moon longitude sum at `instant`, degrees [0, 360). Yogam basis.
    fn sun_moon_sum(&self, instant: TimeInstant) -> Result<f64, EphemerisError> {
        let moon = self.moon_longitude(instant)?;
        let sun = self.sun_longitude(instant)?;
        Ok(panchangam_angle::normalize_360(sun + moon))
    }
}
