//! Tamil solar date for a Gregorian date, keyed to sunrise.

use chrono::{Datelike, NaiveDate};
use panchangam_base::{tamil_day_of_month, tamil_month_from_longitude, tamil_weekday_for, tamil_year_name_for};
use panchangam_ephem::{EphemerisError, EphemerisProvider};
use panchangam_time::TimeInstant;

use crate::types::TamilDate;

/// Tamil date for `date`, using the Sun's longitude at `sunrise` to fix
/// the solar month.
pub fn tamil_date_at_sunrise<P: EphemerisProvider + ?Sized>(
    provider: &P,
    date: NaiveDate,
    sunrise: TimeInstant,
) -> Result<TamilDate, EphemerisError> {
    let sun_longitude = provider.sun_longitude(sunrise)?;
    let month = tamil_month_from_longitude(sun_longitude);

    Ok(TamilDate {
        month,
        day: tamil_day_of_month(date, month),
        year_name: tamil_year_name_for(date),
        weekday: tamil_weekday_for(date.weekday()),
    })
}
