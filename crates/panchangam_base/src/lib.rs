//! Fixed lookup tables and pure angle-to-unit classification for the
//! Tamil panchangam.
//!
//! This crate provides:
//! - The five angam name tables (nakshatram, thithi, yogam, karanam) with
//!   their irregular boundary rules
//! - Weekday-indexed day-segment tables (rahukaalam, yamagandam, kuligai,
//!   nalla neram, gowri)
//! - Tamil solar calendar tables (months, weekdays, 60-year cycle)
//! - Dietary guidance derived from the thithi
//!
//! Everything here is a pure function of its inputs over immutable
//! constant tables built at compile time; reads need no synchronization.

pub mod food;
pub mod gowri;
pub mod karanam;
pub mod nakshatram;
pub mod tamil_calendar;
pub mod thithi;
pub mod timings;
pub mod yogam;

pub use food::{FoodGuidance, food_guidance_for_thithi};
pub use gowri::{
    ALL_GOWRI_STATES, GOWRI_PATTERNS, GOWRI_SEGMENTS, GowriState, gowri_pattern_for_weekday,
};
pub use karanam::{
    ALL_RECURRING_KARANAMS, KARANAM_COUNT, KARANAM_SPAN_DEG, KaranamName, KaranamPosition,
    karanam_from_angle, karanam_name_for_number,
};
pub use nakshatram::{
    ALL_NAKSHATRAMS, NAKSHATRAM_COUNT, NAKSHATRAM_SPAN_DEG, Nakshatram, NakshatramLord,
    NakshatramPosition, nakshatram_from_longitude,
};
pub use tamil_calendar::{
    ALL_TAMIL_MONTHS, ALL_TAMIL_WEEKDAYS, TAMIL_CYCLE_EPOCH_YEAR, TAMIL_YEAR_NAMES, TamilMonth,
    TamilWeekday, tamil_day_of_month, tamil_month_from_longitude, tamil_weekday_for,
    tamil_year_name_for,
};
pub use thithi::{
    Paksha, THITHI_COUNT, THITHI_SPAN_DEG, ThithiName, ThithiPosition, is_special_thithi,
    thithi_from_angle,
};
pub use timings::{
    DAY_SEGMENT_COUNT, KULIGAI_SEGMENTS, NALLA_NERAM_CLOCKS, RAHUKAALAM_SEGMENTS,
    YAMAGANDAM_SEGMENTS, kuligai_segment_for_weekday, nalla_neram_clocks_for_weekday,
    rahukaalam_segment_for_weekday, yamagandam_segment_for_weekday,
};
pub use yogam::{
    ALL_YOGAMS, YOGAM_COUNT, YOGAM_SPAN_DEG, Yogam, YogamPosition, YogamType, yogam_from_sum,
};
