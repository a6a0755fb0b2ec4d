//! Nakshatram (lunar mansion) classification.
//!
//! The ecliptic divides into 27 equal nakshatrams of 13 deg 20'
//! (13.3333... deg) each, tracked by the Moon's longitude. Each
//! nakshatram has a ruling lord; the lords cycle through a fixed
//! 9-graha pattern repeated three times around the circle.

use panchangam_angle::normalize_360;
use serde::Serialize;

/// Number of nakshatrams.
pub const NAKSHATRAM_COUNT: u8 = 27;

/// Span of one nakshatram: 360/27 = 13.3333... degrees.
pub const NAKSHATRAM_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatrams in Tamil naming, Ashwini through Revathi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatram {
    Ashwini,
    Bharani,
    Krithigai,
    Rohini,
    Mrigashirisham,
    Thiruvathirai,
    Punarpoosam,
    Poosam,
    Ayilyam,
    Magam,
    Pooram,
    Uthiram,
    Hastham,
    Chithirai,
    Swathi,
    Visagam,
    Anusham,
    Kettai,
    Moolam,
    Pooradam,
    Uthiradam,
    Thiruvonam,
    Avittam,
    Sathayam,
    Poorattathi,
    Uthirattathi,
    Revathi,
}

/// All 27 nakshatrams in order (0 = Ashwini, 26 = Revathi).
pub const ALL_NAKSHATRAMS: [Nakshatram; 27] = [
    Nakshatram::Ashwini,
    Nakshatram::Bharani,
    Nakshatram::Krithigai,
    Nakshatram::Rohini,
    Nakshatram::Mrigashirisham,
    Nakshatram::Thiruvathirai,
    Nakshatram::Punarpoosam,
    Nakshatram::Poosam,
    Nakshatram::Ayilyam,
    Nakshatram::Magam,
    Nakshatram::Pooram,
    Nakshatram::Uthiram,
    Nakshatram::Hastham,
    Nakshatram::Chithirai,
    Nakshatram::Swathi,
    Nakshatram::Visagam,
    Nakshatram::Anusham,
    Nakshatram::Kettai,
    Nakshatram::Moolam,
    Nakshatram::Pooradam,
    Nakshatram::Uthiradam,
    Nakshatram::Thiruvonam,
    Nakshatram::Avittam,
    Nakshatram::Sathayam,
    Nakshatram::Poorattathi,
    Nakshatram::Uthirattathi,
    Nakshatram::Revathi,
];

/// Ruling lords of the nakshatrams: nine grahas cycling three times
/// through the 27 mansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NakshatramLord {
    Ketu,
    Venus,
    Sun,
    Moon,
    Mars,
    Rahu,
    Jupiter,
    Saturn,
    Mercury,
}

/// The 9-lord cycle starting at Ashwini. Index `i` rules nakshatram
/// `i`, `i+9`, and `i+18`.
pub const LORD_CYCLE: [NakshatramLord; 9] = [
    NakshatramLord::Ketu,
    NakshatramLord::Venus,
    NakshatramLord::Sun,
    NakshatramLord::Moon,
    NakshatramLord::Mars,
    NakshatramLord::Rahu,
    NakshatramLord::Jupiter,
    NakshatramLord::Saturn,
    NakshatramLord::Mercury,
];

impl Nakshatram {
    /// Tamil name of the nakshatram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krithigai => "Krithigai",
            Self::Rohini => "Rohini",
            Self::Mrigashirisham => "Mrigashirisham",
            Self::Thiruvathirai => "Thiruvathirai",
            Self::Punarpoosam => "Punarpoosam",
            Self::Poosam => "Poosam",
            Self::Ayilyam => "Ayilyam",
            Self::Magam => "Magam",
            Self::Pooram => "Pooram",
            Self::Uthiram => "Uthiram",
            Self::Hastham => "Hastham",
            Self::Chithirai => "Chithirai",
            Self::Swathi => "Swathi",
            Self::Visagam => "Visagam",
            Self::Anusham => "Anusham",
            Self::Kettai => "Kettai",
            Self::Moolam => "Moolam",
            Self::Pooradam => "Pooradam",
            Self::Uthiradam => "Uthiradam",
            Self::Thiruvonam => "Thiruvonam",
            Self::Avittam => "Avittam",
            Self::Sathayam => "Sathayam",
            Self::Poorattathi => "Poorattathi",
            Self::Uthirattathi => "Uthirattathi",
            Self::Revathi => "Revathi",
        }
    }

    /// 0-based index (Ashwini=0 .. Revathi=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krithigai => 2,
            Self::Rohini => 3,
            Self::Mrigashirisham => 4,
            Self::Thiruvathirai => 5,
            Self::Punarpoosam => 6,
            Self::Poosam => 7,
            Self::Ayilyam => 8,
            Self::Magam => 9,
            Self::Pooram => 10,
            Self::Uthiram => 11,
            Self::Hastham => 12,
            Self::Chithirai => 13,
            Self::Swathi => 14,
            Self::Visagam => 15,
            Self::Anusham => 16,
            Self::Kettai => 17,
            Self::Moolam => 18,
            Self::Pooradam => 19,
            Self::Uthiradam => 20,
            Self::Thiruvonam => 21,
            Self::Avittam => 22,
            Self::Sathayam => 23,
            Self::Poorattathi => 24,
            Self::Uthirattathi => 25,
            Self::Revathi => 26,
        }
    }

    /// Ruling lord of this nakshatram.
    pub const fn lord(self) -> NakshatramLord {
        LORD_CYCLE[(self.index() % 9) as usize]
    }
}

impl NakshatramLord {
    /// English name of the lord.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ketu => "Ketu",
            Self::Venus => "Venus",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Rahu => "Rahu",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Mercury => "Mercury",
        }
    }
}

/// Result of a nakshatram lookup from Moon longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatramPosition {
    /// The nakshatram.
    pub nakshatram: Nakshatram,
    /// 0-based index (0 = Ashwini).
    pub index: u8,
    /// Ruling lord.
    pub lord: NakshatramLord,
}

/// Determine the nakshatram from the Moon's ecliptic longitude.
pub fn nakshatram_from_longitude(moon_longitude_deg: f64) -> NakshatramPosition {
    let lon = normalize_360(moon_longitude_deg);
    let index = ((lon / NAKSHATRAM_SPAN_DEG).floor() as u8) % NAKSHATRAM_COUNT;
    let nakshatram = ALL_NAKSHATRAMS[index as usize];
    NakshatramPosition {
        nakshatram,
        index,
        lord: nakshatram.lord(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatrams_count() {
        assert_eq!(ALL_NAKSHATRAMS.len(), NAKSHATRAM_COUNT as usize);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAMS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for n in ALL_NAKSHATRAMS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn lords_repeat_every_nine() {
        for n in ALL_NAKSHATRAMS {
            let i = n.index();
            assert_eq!(n.lord(), LORD_CYCLE[(i % 9) as usize]);
        }
        // Spot checks against the traditional assignments.
        assert_eq!(Nakshatram::Ashwini.lord(), NakshatramLord::Ketu);
        assert_eq!(Nakshatram::Magam.lord(), NakshatramLord::Ketu);
        assert_eq!(Nakshatram::Moolam.lord(), NakshatramLord::Ketu);
        assert_eq!(Nakshatram::Revathi.lord(), NakshatramLord::Mercury);
    }

    #[test]
    fn index_sweep_over_all_boundaries() {
        // longitude = k*span + eps maps to index k, for every k and
        // offsets spanning the cell.
        for k in 0..27u8 {
            for eps in [0.0, 1e-9, NAKSHATRAM_SPAN_DEG / 2.0, NAKSHATRAM_SPAN_DEG - 1e-9] {
                let lon = k as f64 * NAKSHATRAM_SPAN_DEG + eps;
                let pos = nakshatram_from_longitude(lon);
                assert_eq!(pos.index, k, "lon {lon}");
            }
        }
    }

    #[test]
    fn longitude_zero_is_ashwini() {
        let pos = nakshatram_from_longitude(0.0);
        assert_eq!(pos.nakshatram, Nakshatram::Ashwini);
        assert_eq!(pos.index, 0);
        assert_eq!(pos.lord, NakshatramLord::Ketu);
    }

    #[test]
    fn negative_longitude_wraps_to_revathi() {
        let pos = nakshatram_from_longitude(-1.0);
        assert_eq!(pos.nakshatram, Nakshatram::Revathi);
    }
}
