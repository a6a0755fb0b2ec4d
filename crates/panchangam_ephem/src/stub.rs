//! Deterministic stub providers for tests and demos.
//!
//! Both stubs satisfy the full [`EphemerisProvider`] contract, so they
//! are interchangeable with a real astronomical engine anywhere the
//! engine itself is not under test.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use panchangam_angle::normalize_360;
use panchangam_time::{TimeInstant, local_instant};

use crate::error::EphemerisError;
use crate::provider::{EphemerisProvider, GeoLocation};

/// Mean solar motion along the ecliptic, degrees per day.
pub const SUN_MEAN_RATE_DEG_PER_DAY: f64 = 0.985_647_3;

/// Mean lunar motion along the ecliptic, degrees per day.
pub const MOON_MEAN_RATE_DEG_PER_DAY: f64 = 13.176_396_6;

fn clock_instant(
    date: NaiveDate,
    clock: (u32, u32),
    tz: Tz,
) -> Result<TimeInstant, EphemerisError> {
    local_instant(date, clock.0, clock.1, tz)
        .map_err(|_| EphemerisError::Unavailable("rise/set clock time unrepresentable in zone"))
}

/// Provider with time-invariant longitudes and fixed local rise/set clocks.
///
/// Because the longitudes never move, boundary searches never bracket a
/// crossing, so every end time comes from the linear-rate fallback path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEphemeris {
    /// Sun ecliptic longitude, degrees.
    pub sun_longitude_deg: f64,
    /// Moon ecliptic longitude, degrees.
    pub moon_longitude_deg: f64,
    /// Local wall-clock sunrise (hour, minute).
    pub sunrise_clock: (u32, u32),
    /// Local wall-clock sunset (hour, minute).
    pub sunset_clock: (u32, u32),
}

impl FixedEphemeris {
    /// Fixed longitudes with 06:00 sunrise and 18:00 sunset.
    pub fn new(sun_longitude_deg: f64, moon_longitude_deg: f64) -> Self {
        Self {
            sun_longitude_deg,
            moon_longitude_deg,
            sunrise_clock: (6, 0),
            sunset_clock: (18, 0),
        }
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn sun_longitude(&self, _instant: TimeInstant) -> Result<f64, EphemerisError> {
        Ok(normalize_360(self.sun_longitude_deg))
    }

    fn moon_longitude(&self, _instant: TimeInstant) -> Result<f64, EphemerisError> {
        Ok(normalize_360(self.moon_longitude_deg))
    }

    fn sunrise(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
        tz: Tz,
    ) -> Result<TimeInstant, EphemerisError> {
        clock_instant(date, self.sunrise_clock, tz)
    }

    fn sunset(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
        tz: Tz,
    ) -> Result<TimeInstant, EphemerisError> {
        clock_instant(date, self.sunset_clock, tz)
    }
}

/// Provider with linear mean motions from a configurable epoch.
///
/// Longitudes advance at the mean Sun/Moon rates, so angle functions are
/// genuinely monotonic over solver horizons and bisection finds real
/// crossings. Rise/set stay at fixed local clocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMotionEphemeris {
    /// Instant at which the epoch longitudes apply.
    pub epoch: TimeInstant,
    /// Sun longitude at `epoch`, degrees.
    pub sun_longitude_epoch_deg: f64,
    /// Moon longitude at `epoch`, degrees.
    pub moon_longitude_epoch_deg: f64,
    /// Sun rate, degrees per day.
    pub sun_rate_deg_per_day: f64,
    /// Moon rate, degrees per day.
    pub moon_rate_deg_per_day: f64,
    /// Local wall-clock sunrise (hour, minute).
    pub sunrise_clock: (u32, u32),
    /// Local wall-clock sunset (hour, minute).
    pub sunset_clock: (u32, u32),
}

impl MeanMotionEphemeris {
    /// Mean-rate provider anchored at `epoch` with the given longitudes,
    /// 06:00 sunrise and 18:00 sunset.
    pub fn anchored(epoch: TimeInstant, sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            epoch,
            sun_longitude_epoch_deg: sun_deg,
            moon_longitude_epoch_deg: moon_deg,
            sun_rate_deg_per_day: SUN_MEAN_RATE_DEG_PER_DAY,
            moon_rate_deg_per_day: MOON_MEAN_RATE_DEG_PER_DAY,
            sunrise_clock: (6, 0),
            sunset_clock: (18, 0),
        }
    }

    fn days_since_epoch(&self, instant: TimeInstant) -> f64 {
        let elapsed: Duration = instant - self.epoch;
        elapsed.num_seconds() as f64 / 86_400.0
    }
}

impl EphemerisProvider for MeanMotionEphemeris {
    fn sun_longitude(&self, instant: TimeInstant) -> Result<f64, EphemerisError> {
        let d = self.days_since_epoch(instant);
        Ok(normalize_360(
            self.sun_longitude_epoch_deg + self.sun_rate_deg_per_day * d,
        ))
    }

    fn moon_longitude(&self, instant: TimeInstant) -> Result<f64, EphemerisError> {
        let d = self.days_since_epoch(instant);
        Ok(normalize_360(
            self.moon_longitude_epoch_deg + self.moon_rate_deg_per_day * d,
        ))
    }

    fn sunrise(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
        tz: Tz,
    ) -> Result<TimeInstant, EphemerisError> {
        clock_instant(date, self.sunrise_clock, tz)
    }

    fn sunset(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
        tz: Tz,
    ) -> Result<TimeInstant, EphemerisError> {
        clock_instant(date, self.sunset_clock, tz)
    }
}
