//! Yogam classification.
//!
//! A yogam is one of 27 divisions of (Sun + Moon) longitude sum,
//! 13 deg 20' each, with a traditional three-way quality classification.

use panchangam_angle::normalize_360;
use serde::Serialize;

/// Number of yogams.
pub const YOGAM_COUNT: u8 = 27;

/// Span of one yogam: 360/27 = 13.3333... degrees.
pub const YOGAM_SPAN_DEG: f64 = 360.0 / 27.0;

/// Traditional quality classification of a yogam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogamType {
    Auspicious,
    Inauspicious,
    Neutral,
}

impl YogamType {
    /// Display name of the classification.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "auspicious",
            Self::Inauspicious => "inauspicious",
            Self::Neutral => "neutral",
        }
    }
}

/// The 27 yogams, Vishkumbham through Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yogam {
    Vishkumbham,
    Priti,
    Ayushman,
    Saubhagya,
    Sobhanam,
    Atiganda,
    Sukarma,
    Dhriti,
    Soola,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyagatha,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Siva,
    Siddha,
    Sadhya,
    Subha,
    Sukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogams in order (0 = Vishkumbham, 26 = Vaidhriti).
pub const ALL_YOGAMS: [Yogam; 27] = [
    Yogam::Vishkumbham,
    Yogam::Priti,
    Yogam::Ayushman,
    Yogam::Saubhagya,
    Yogam::Sobhanam,
    Yogam::Atiganda,
    Yogam::Sukarma,
    Yogam::Dhriti,
    Yogam::Soola,
    Yogam::Ganda,
    Yogam::Vriddhi,
    Yogam::Dhruva,
    Yogam::Vyagatha,
    Yogam::Harshana,
    Yogam::Vajra,
    Yogam::Siddhi,
    Yogam::Vyatipata,
    Yogam::Variyan,
    Yogam::Parigha,
    Yogam::Siva,
    Yogam::Siddha,
    Yogam::Sadhya,
    Yogam::Subha,
    Yogam::Sukla,
    Yogam::Brahma,
    Yogam::Indra,
    Yogam::Vaidhriti,
];

impl Yogam {
    /// Name of the yogam.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbham => "Vishkumbham",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Sobhanam => "Sobhanam",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Soola => "Soola",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyagatha => "Vyagatha",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Siva => "Siva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Subha => "Subha",
            Self::Sukla => "Sukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkumbham=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Vishkumbham => 0,
            Self::Priti => 1,
            Self::Ayushman => 2,
            Self::Saubhagya => 3,
            Self::Sobhanam => 4,
            Self::Atiganda => 5,
            Self::Sukarma => 6,
            Self::Dhriti => 7,
            Self::Soola => 8,
            Self::Ganda => 9,
            Self::Vriddhi => 10,
            Self::Dhruva => 11,
            Self::Vyagatha => 12,
            Self::Harshana => 13,
            Self::Vajra => 14,
            Self::Siddhi => 15,
            Self::Vyatipata => 16,
            Self::Variyan => 17,
            Self::Parigha => 18,
            Self::Siva => 19,
            Self::Siddha => 20,
            Self::Sadhya => 21,
            Self::Subha => 22,
            Self::Sukla => 23,
            Self::Brahma => 24,
            Self::Indra => 25,
            Self::Vaidhriti => 26,
        }
    }

    /// Traditional classification of this yogam.
    pub const fn kind(self) -> YogamType {
        match self {
            Self::Vishkumbham
            | Self::Atiganda
            | Self::Soola
            | Self::Ganda
            | Self::Vyagatha
            | Self::Vyatipata
            | Self::Parigha
            | Self::Vaidhriti => YogamType::Inauspicious,
            Self::Vajra => YogamType::Neutral,
            _ => YogamType::Auspicious,
        }
    }
}

/// Result of a yogam lookup from the Sun+Moon longitude sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogamPosition {
    /// The yogam.
    pub yogam: Yogam,
    /// 0-based index (0 = Vishkumbham).
    pub index: u8,
    /// Quality classification.
    pub kind: YogamType,
}

/// Determine the yogam from the (Sun + Moon) longitude sum in degrees.
pub fn yogam_from_sum(sun_moon_sum_deg: f64) -> YogamPosition {
    let sum = normalize_360(sun_moon_sum_deg);
    let index = ((sum / YOGAM_SPAN_DEG).floor() as u8) % YOGAM_COUNT;
    let yogam = ALL_YOGAMS[index as usize];
    YogamPosition {
        yogam,
        index,
        kind: yogam.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_yogams_count() {
        assert_eq!(ALL_YOGAMS.len(), YOGAM_COUNT as usize);
    }

    #[test]
    fn indices_sequential() {
        for (i, y) in ALL_YOGAMS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for y in ALL_YOGAMS {
            assert!(!y.name().is_empty());
        }
    }

    #[test]
    fn classification_counts() {
        let inauspicious = ALL_YOGAMS
            .iter()
            .filter(|y| y.kind() == YogamType::Inauspicious)
            .count();
        let neutral = ALL_YOGAMS
            .iter()
            .filter(|y| y.kind() == YogamType::Neutral)
            .count();
        assert_eq!(inauspicious, 8);
        assert_eq!(neutral, 1);
    }

    #[test]
    fn sum_zero_is_vishkumbham() {
        let pos = yogam_from_sum(0.0);
        assert_eq!(pos.yogam, Yogam::Vishkumbham);
        assert_eq!(pos.kind, YogamType::Inauspicious);
    }

    #[test]
    fn vajra_is_neutral() {
        // Vajra is index 14: [186.67, 200.0) degrees.
        let pos = yogam_from_sum(190.0);
        assert_eq!(pos.yogam, Yogam::Vajra);
        assert_eq!(pos.kind, YogamType::Neutral);
    }

    #[test]
    fn last_cell_is_vaidhriti() {
        let pos = yogam_from_sum(355.0);
        assert_eq!(pos.yogam, Yogam::Vaidhriti);
        assert_eq!(pos.index, 26);
    }
}
