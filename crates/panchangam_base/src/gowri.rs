//! Gowri panchangam state tables.
//!
//! The Gowri scheme assigns each of the 8 sunrise-to-sunset segments one
//! of 8 named states, rotated by weekday. Five states are auspicious
//! (Amirdha, Uthi, Laabam, Sugam, Dhanam), three are not (Rogam, Soram,
//! Visham); by table construction every weekday carries exactly five
//! auspicious segments.
//!
//! Pattern source: traditional Pambu panchangam rotation.

use serde::Serialize;

/// Segments per Gowri day.
pub const GOWRI_SEGMENTS: usize = 8;

/// The eight Gowri states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GowriState {
    Amirdha,
    Uthi,
    Laabam,
    Sugam,
    Dhanam,
    Rogam,
    Soram,
    Visham,
}

/// All eight states.
pub const ALL_GOWRI_STATES: [GowriState; 8] = [
    GowriState::Amirdha,
    GowriState::Uthi,
    GowriState::Laabam,
    GowriState::Sugam,
    GowriState::Dhanam,
    GowriState::Rogam,
    GowriState::Soram,
    GowriState::Visham,
];

impl GowriState {
    /// Tamil name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amirdha => "Amirdha",
            Self::Uthi => "Uthi",
            Self::Laabam => "Laabam",
            Self::Sugam => "Sugam",
            Self::Dhanam => "Dhanam",
            Self::Rogam => "Rogam",
            Self::Soram => "Soram",
            Self::Visham => "Visham",
        }
    }

    /// Whether the state counts as auspicious.
    pub const fn is_auspicious(self) -> bool {
        matches!(
            self,
            Self::Amirdha | Self::Uthi | Self::Laabam | Self::Sugam | Self::Dhanam
        )
    }
}

/// Gowri state of each of the 8 day segments, per weekday (Sunday = 0).
pub const GOWRI_PATTERNS: [[GowriState; GOWRI_SEGMENTS]; 7] = {
    use GowriState::*;
    [
        // Sunday
        [Uthi, Rogam, Visham, Dhanam, Soram, Laabam, Amirdha, Sugam],
        // Monday
        [Amirdha, Visham, Rogam, Dhanam, Laabam, Soram, Uthi, Sugam],
        // Tuesday
        [Rogam, Amirdha, Laabam, Dhanam, Uthi, Visham, Soram, Sugam],
        // Wednesday
        [Sugam, Soram, Amirdha, Laabam, Rogam, Uthi, Visham, Dhanam],
        // Thursday
        [Laabam, Visham, Uthi, Amirdha, Sugam, Rogam, Dhanam, Soram],
        // Friday
        [Dhanam, Laabam, Sugam, Uthi, Rogam, Amirdha, Visham, Soram],
        // Saturday
        [Soram, Sugam, Rogam, Visham, Amirdha, Dhanam, Laabam, Uthi],
    ]
};

/// Gowri pattern for a weekday index (Sunday = 0 .. Saturday = 6).
pub fn gowri_pattern_for_weekday(weekday: usize) -> &'static [GowriState; GOWRI_SEGMENTS] {
    &GOWRI_PATTERNS[weekday % 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_auspicious_segments_every_weekday() {
        for (day, pattern) in GOWRI_PATTERNS.iter().enumerate() {
            let auspicious = pattern.iter().filter(|s| s.is_auspicious()).count();
            assert_eq!(auspicious, 5, "weekday {day}");
        }
    }

    #[test]
    fn every_weekday_uses_each_state_once() {
        for (day, pattern) in GOWRI_PATTERNS.iter().enumerate() {
            for state in ALL_GOWRI_STATES {
                let occurrences = pattern.iter().filter(|&&s| s == state).count();
                assert_eq!(occurrences, 1, "weekday {day}, state {}", state.name());
            }
        }
    }

    #[test]
    fn auspicious_set() {
        assert!(GowriState::Amirdha.is_auspicious());
        assert!(GowriState::Dhanam.is_auspicious());
        assert!(!GowriState::Rogam.is_auspicious());
        assert!(!GowriState::Soram.is_auspicious());
        assert!(!GowriState::Visham.is_auspicious());
    }

    #[test]
    fn weekday_lookup_wraps() {
        assert_eq!(gowri_pattern_for_weekday(0), &GOWRI_PATTERNS[0]);
        assert_eq!(gowri_pattern_for_weekday(7), &GOWRI_PATTERNS[0]);
    }
}
