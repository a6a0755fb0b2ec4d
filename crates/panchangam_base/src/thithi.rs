//! Thithi (lunar day) classification.
//!
//! A thithi is one of 30 divisions of the Moon−Sun elongation, 12 degrees
//! each. Numbers 1-15 form the Shukla (waxing) paksha, 16-30 the Krishna
//! (waning) paksha re-indexed 1-15. Both pakshas share one 15-entry name
//! table, except that Shukla 15 is always Pournami (full moon) and
//! Krishna 15 is always Amavasai (new moon).

use panchangam_angle::normalize_360;
use serde::Serialize;

/// Number of thithis in a lunar month.
pub const THITHI_COUNT: u8 = 30;

/// Span of one thithi in Moon−Sun elongation: 12 degrees.
pub const THITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing fortnight, elongation 0-180 degrees.
    Shukla,
    /// Waning fortnight, elongation 180-360 degrees.
    Krishna,
}

impl Paksha {
    /// Name of the paksha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Thithi names. The first fourteen recur in both pakshas; Pournami and
/// Amavasai close the Shukla and Krishna pakshas respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ThithiName {
    Prathama,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Sashti,
    Saptami,
    Ashtami,
    Navami,
    Dasami,
    Ekadasi,
    Dvadasi,
    Trayodasi,
    Chaturdasi,
    Pournami,
    Amavasai,
}

/// Shared 14-entry recurring name table (position 15 is paksha-specific).
const RECURRING_NAMES: [ThithiName; 14] = [
    ThithiName::Prathama,
    ThithiName::Dvitiya,
    ThithiName::Tritiya,
    ThithiName::Chaturthi,
    ThithiName::Panchami,
    ThithiName::Sashti,
    ThithiName::Saptami,
    ThithiName::Ashtami,
    ThithiName::Navami,
    ThithiName::Dasami,
    ThithiName::Ekadasi,
    ThithiName::Dvadasi,
    ThithiName::Trayodasi,
    ThithiName::Chaturdasi,
];

impl ThithiName {
    /// Display name of the thithi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prathama => "Prathama",
            Self::Dvitiya => "Dvitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Sashti => "Sashti",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dasami => "Dasami",
            Self::Ekadasi => "Ekadasi",
            Self::Dvadasi => "Dvadasi",
            Self::Trayodasi => "Trayodasi",
            Self::Chaturdasi => "Chaturdasi",
            Self::Pournami => "Pournami",
            Self::Amavasai => "Amavasai",
        }
    }
}

/// Result of a thithi lookup from Moon−Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThithiPosition {
    /// The thithi name.
    pub name: ThithiName,
    /// 1-based thithi number in the lunar month (1-30).
    pub number: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based number within the paksha (1-15).
    pub number_in_paksha: u8,
}

/// Determine the thithi from the Moon−Sun elongation in degrees.
pub fn thithi_from_angle(moon_sun_angle_deg: f64) -> ThithiPosition {
    let angle = normalize_360(moon_sun_angle_deg);
    let number = ((angle / THITHI_SPAN_DEG).floor() as u8 + 1).min(THITHI_COUNT);

    let (paksha, number_in_paksha) = if number <= 15 {
        (Paksha::Shukla, number)
    } else {
        (Paksha::Krishna, number - 15)
    };

    // The 15th unit of each paksha has a fixed name overriding the table.
    let name = if number_in_paksha == 15 {
        match paksha {
            Paksha::Shukla => ThithiName::Pournami,
            Paksha::Krishna => ThithiName::Amavasai,
        }
    } else {
        RECURRING_NAMES[(number_in_paksha - 1) as usize]
    };

    ThithiPosition {
        name,
        number,
        paksha,
        number_in_paksha,
    }
}

/// Whether the thithi number carries special observance (Ekadasi of either
/// paksha, Pournami, or Amavasai).
pub fn is_special_thithi(number: u8) -> bool {
    matches!(number, 11 | 15 | 26 | 30)
}
