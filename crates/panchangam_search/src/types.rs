//! Snapshot data model: per-angam info, timing windows, Tamil date.

use chrono::NaiveDate;
use panchangam_base::{
    FoodGuidance, KaranamName, Nakshatram, NakshatramLord, Paksha, TamilMonth, TamilWeekday,
    ThithiName, Yogam, YogamType,
};
use panchangam_time::{TimeInstant, TimeInterval};
use serde::Serialize;

/// Nakshatram at sunrise with its end instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatramInfo {
    /// The nakshatram.
    pub nakshatram: Nakshatram,
    /// 0-based index (0 = Ashwini).
    pub index: u8,
    /// Ruling lord.
    pub lord: NakshatramLord,
    /// When the Moon crosses into the next nakshatram.
    pub end: TimeInstant,
    /// True when `end` is a linear-rate estimate rather than a solved crossing.
    pub estimated: bool,
}

/// Thithi at sunrise with its end instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThithiInfo {
    /// The thithi name.
    pub name: ThithiName,
    /// 1-based number in the lunar month (1-30).
    pub number: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based number within the paksha (1-15).
    pub number_in_paksha: u8,
    /// When the elongation crosses into the next thithi.
    pub end: TimeInstant,
    /// True when `end` is a linear-rate estimate rather than a solved crossing.
    pub estimated: bool,
}

/// Karanam at sunrise with its end instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranamInfo {
    /// The karanam name.
    pub name: KaranamName,
    /// 1-based number in the lunar month (1-60).
    pub number: u8,
    /// Whether the name is the inauspicious recurring unit Vishti.
    pub vishti: bool,
    /// When the elongation crosses into the next karanam.
    pub end: TimeInstant,
    /// True when `end` is a linear-rate estimate rather than a solved crossing.
    pub estimated: bool,
}

/// Yogam at sunrise with its start and end instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogamInfo {
    /// The yogam.
    pub yogam: Yogam,
    /// 0-based index (0 = Vishkumbham).
    pub index: u8,
    /// Quality classification.
    pub kind: YogamType,
    /// When this yogam began.
    pub start: TimeInstant,
    /// When the longitude sum crosses into the next yogam.
    pub end: TimeInstant,
    /// True when either boundary defaulted because no change was found
    /// within the scan horizon.
    pub estimated: bool,
}

/// Quality classification of a timing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimingKind {
    /// General auspicious window from the weekday clock table.
    NallaNeram,
    /// Auspicious segment of the Gowri panchangam.
    Gowri,
    /// Inauspicious Rahukaalam segment.
    Rahukaalam,
    /// Inauspicious Yamagandam segment.
    Yamagandam,
    /// Inauspicious Kuligai segment.
    Kuligai,
}

impl TimingKind {
    /// Display label for the window kind.
    pub const fn name(self) -> &'static str {
        match self {
            TimingKind::NallaNeram => "Nalla Neram",
            TimingKind::Gowri => "Gowri Nalla Neram",
            TimingKind::Rahukaalam => "Rahukaalam",
            TimingKind::Yamagandam => "Yamagandam",
            TimingKind::Kuligai => "Kuligai",
        }
    }

    /// Whether windows of this kind are auspicious.
    pub const fn is_auspicious(self) -> bool {
        matches!(self, TimingKind::NallaNeram | TimingKind::Gowri)
    }
}

/// One classified span of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingWindow {
    /// Window classification.
    pub kind: TimingKind,
    /// The span itself.
    pub interval: TimeInterval,
}

/// A Tamil solar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamilDate {
    /// Tamil month (solar, by the Sun's rasi at sunrise).
    pub month: TamilMonth,
    /// Day within the Tamil month (1-32).
    pub day: u8,
    /// Name of the year in the 60-year cycle.
    pub year_name: &'static str,
    /// Tamil weekday.
    pub weekday: TamilWeekday,
}

/// Complete daily panchangam.
///
/// Produced atomically; every end time and every window inside derives
/// from the same sunrise instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangamSnapshot {
    /// Gregorian date the snapshot was requested for.
    pub date: NaiveDate,
    /// Tamil solar date.
    pub tamil_date: TamilDate,
    /// Nakshatram at sunrise.
    pub nakshatram: NakshatramInfo,
    /// Thithi at sunrise.
    pub thithi: ThithiInfo,
    /// Yogam at sunrise.
    pub yogam: YogamInfo,
    /// Karanam at sunrise.
    pub karanam: KaranamInfo,
    /// Sunrise instant all elements are keyed to.
    pub sunrise: TimeInstant,
    /// Sunset instant bounding the day segments.
    pub sunset: TimeInstant,
    /// Ordered timing windows (inauspicious segments, then nalla neram,
    /// then gowri), each within the daylight span.
    pub windows: Vec<TimingWindow>,
    /// Dietary guidance derived from the thithi.
    pub food: FoodGuidance,
}
