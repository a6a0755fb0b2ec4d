//! Error type for ephemeris provider failures.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors a provider may report.
///
/// Providers must signal failure explicitly (e.g. polar day/night for
/// rise/set) rather than silently substituting a value; the caller owns
/// the fallback policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider cannot answer for the given instant/location.
    Unavailable(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
