//! Snapshot orchestration: one daily panchangam, or a week of them.

use chrono::{Duration, NaiveDate};
use panchangam_base::food_guidance_for_thithi;
use panchangam_ephem::{EphemerisProvider, GeoLocation};
use panchangam_time::resolve_timezone;

use crate::angam::{karanam_at_sunrise, nakshatram_at_sunrise, thithi_at_sunrise, yogam_at_sunrise};
use crate::error::PanchangamError;
use crate::segments::timing_windows;
use crate::tamil_date::tamil_date_at_sunrise;
use crate::types::PanchangamSnapshot;

/// Compute the full panchangam for one date.
///
/// Validates location and timezone, obtains sunrise/sunset from the
/// provider, and keys every angam end time, window, and Tamil date off
/// that single sunrise. A provider failure for rise/set surfaces as an
/// error; a plausible-looking default would poison every downstream
/// element.
pub fn compute_daily<P: EphemerisProvider + ?Sized>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
    timezone: &str,
) -> Result<PanchangamSnapshot, PanchangamError> {
    if !location.in_range() {
        return Err(PanchangamError::InvalidLocation(
            "latitude must be in [-90, 90] and longitude in [-180, 180]",
        ));
    }
    let tz = resolve_timezone(timezone)?;

    let sunrise = provider.sunrise(date, location, tz)?;
    let sunset = provider.sunset(date, location, tz)?;
    if sunset <= sunrise {
        return Err(PanchangamError::InvalidLocation(
            "sunset does not follow sunrise",
        ));
    }

    let nakshatram = nakshatram_at_sunrise(provider, sunrise)?;
    let thithi = thithi_at_sunrise(provider, sunrise)?;
    let yogam = yogam_at_sunrise(provider, sunrise)?;
    let karanam = karanam_at_sunrise(provider, sunrise)?;
    let tamil_date = tamil_date_at_sunrise(provider, date, sunrise)?;
    let windows = timing_windows(sunrise, sunset);
    let food = food_guidance_for_thithi(thithi.name);

    Ok(PanchangamSnapshot {
        date,
        tamil_date,
        nakshatram,
        thithi,
        yogam,
        karanam,
        sunrise,
        sunset,
        windows,
        food,
    })
}

/// Compute snapshots for 7 consecutive dates starting at `start_date`.
///
/// Fails on the first date that fails; no partial week is returned.
pub fn compute_weekly<P: EphemerisProvider + ?Sized>(
    provider: &P,
    start_date: NaiveDate,
    location: &GeoLocation,
    timezone: &str,
) -> Result<Vec<PanchangamSnapshot>, PanchangamError> {
    (0..7)
        .map(|offset| {
            let date = start_date + Duration::days(offset);
            compute_daily(provider, date, location, timezone)
        })
        .collect()
}
