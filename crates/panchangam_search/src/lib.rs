//! Panchangam derivation: angam calculators, day segmentation, Tamil
//! solar date, and the daily/weekly snapshot orchestrators.
//!
//! Everything is driven by an [`EphemerisProvider`] supplied by the
//! caller; the engine itself holds no state beyond compile-time lookup
//! tables, so independent snapshot computations may run in parallel
//! whenever the provider allows it.

pub mod angam;
pub mod error;
pub mod segments;
pub mod snapshot;
pub mod solver;
pub mod tamil_date;
pub mod types;

pub use angam::{karanam_at_sunrise, nakshatram_at_sunrise, thithi_at_sunrise, yogam_at_sunrise};
pub use error::PanchangamError;
pub use panchangam_ephem::{EphemerisProvider, GeoLocation};
pub use segments::{gowri_windows, nalla_neram_windows, timing_windows};
pub use snapshot::{compute_daily, compute_weekly};
pub use solver::find_angle_crossing;
pub use tamil_date::tamil_date_at_sunrise;
pub use types::{
    KaranamInfo, NakshatramInfo, PanchangamSnapshot, TamilDate, ThithiInfo, TimingKind,
    TimingWindow, YogamInfo,
};
