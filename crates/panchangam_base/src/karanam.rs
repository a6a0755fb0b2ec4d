//! Karanam (half-thithi) classification.
//!
//! A karanam spans 6 degrees of Moon−Sun elongation, 60 per lunar month.
//! Four are fixed (occur exactly once): Kimstughna at number 1, then
//! Sakuni, Chatushpada, and Naga at 58-60. Numbers 2-57 cycle through
//! seven recurring karanams, of which Vishti is held inauspicious.

use panchangam_angle::normalize_360;
use serde::Serialize;

/// Number of karanams in a lunar month.
pub const KARANAM_COUNT: u8 = 60;

/// Span of one karanam in Moon−Sun elongation: 6 degrees.
pub const KARANAM_SPAN_DEG: f64 = 6.0;

/// The eleven karanam names: seven recurring and four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KaranamName {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Sakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The recurring 7-cycle, in the order it repeats through numbers 2-57.
pub const ALL_RECURRING_KARANAMS: [KaranamName; 7] = [
    KaranamName::Bava,
    KaranamName::Balava,
    KaranamName::Kaulava,
    KaranamName::Taitila,
    KaranamName::Gara,
    KaranamName::Vanija,
    KaranamName::Vishti,
];

impl KaranamName {
    /// Display name of the karanam.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Sakuni => "Sakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this is one of the four fixed (once-per-month) karanams.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Sakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Result of a karanam lookup from Moon−Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranamPosition {
    /// The karanam name.
    pub name: KaranamName,
    /// 1-based karanam number in the lunar month (1-60).
    pub number: u8,
    /// Whether the name is the inauspicious recurring unit Vishti.
    pub vishti: bool,
}

/// Name for a 1-based karanam number.
///
/// Number 1 is Kimstughna; 58-60 are Sakuni, Chatushpada, Naga in order;
/// 2-57 walk the recurring 7-cycle.
pub fn karanam_name_for_number(number: u8) -> KaranamName {
    match number {
        1 => KaranamName::Kimstughna,
        58 => KaranamName::Sakuni,
        59 => KaranamName::Chatushpada,
        60 => KaranamName::Naga,
        n => ALL_RECURRING_KARANAMS[((n - 2) % 7) as usize],
    }
}

/// Determine the karanam from the Moon−Sun elongation in degrees.
pub fn karanam_from_angle(moon_sun_angle_deg: f64) -> KaranamPosition {
    let angle = normalize_360(moon_sun_angle_deg);
    let number = ((angle / KARANAM_SPAN_DEG).floor() as u8 + 1).min(KARANAM_COUNT);
    let name = karanam_name_for_number(number);
    KaranamPosition {
        name,
        number,
        vishti: name == KaranamName::Vishti,
    }
}
