//! Time types for panchangam calculations.
//!
//! All calculators operate on absolute instants; the civil timezone is
//! attached for display only. Angle comparisons downstream never look at
//! the civil representation.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

/// An absolute point in time carrying its civil timezone for display.
pub type TimeInstant = DateTime<Tz>;

/// Errors from timezone resolution and civil time construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timezone identifier could not be resolved against the IANA database.
    InvalidTimezone(String),
    /// Civil wall-clock time does not exist in the given zone (DST gap).
    NonexistentLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimezone(name) => write!(f, "invalid timezone: {name}"),
            Self::NonexistentLocalTime(msg) => {
                write!(f, "nonexistent local time: {msg}")
            }
        }
    }
}

impl Error for TimeError {}

/// Resolve an IANA timezone identifier (e.g. "Asia/Kolkata").
pub fn resolve_timezone(name: &str) -> Result<Tz, TimeError> {
    Tz::from_str(name).map_err(|_| TimeError::InvalidTimezone(name.to_string()))
}

/// Build an instant from a civil date and wall-clock hour/minute in `tz`.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant.
pub fn local_instant(date: NaiveDate, hour: u32, minute: u32, tz: Tz) -> Result<TimeInstant, TimeError> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeError::NonexistentLocalTime(format!("{date} {hour:02}:{minute:02}")))?;
    naive
        .and_local_timezone(tz)
        .earliest()
        .ok_or_else(|| TimeError::NonexistentLocalTime(format!("{date} {hour:02}:{minute:02} in {tz}")))
}

/// A half-open span of time, `end` strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    /// Start of the interval (inclusive).
    pub start: TimeInstant,
    /// End of the interval (exclusive).
    pub end: TimeInstant,
}

impl TimeInterval {
    /// Create an interval. Returns `None` unless `end` is strictly after `start`.
    pub fn new(start: TimeInstant, end: TimeInstant) -> Option<Self> {
        if end > start { Some(Self { start, end }) } else { None }
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `instant` falls within [start, end).
    pub fn contains(&self, instant: TimeInstant) -> bool {
        instant >= self.start && instant < self.end
    }
}
