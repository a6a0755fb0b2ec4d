//! Weekday tables for daily timing windows.
//!
//! Rahukaalam, Yamagandam, and Kuligai each occupy one of 8 equal
//! sunrise-to-sunset segments, chosen by weekday. Nalla Neram (general
//! auspicious windows) instead comes from a weekday table of two local
//! wall-clock ranges, later clipped to daylight.
//!
//! All weekday indices are Sunday = 0 .. Saturday = 6; segment numbers
//! are 1-based.

/// Segments per day for the segment-table timings.
pub const DAY_SEGMENT_COUNT: u8 = 8;

/// Rahukaalam segment per weekday: Sun=8, Mon=2, Tue=7, Wed=5, Thu=6, Fri=4, Sat=3.
pub const RAHUKAALAM_SEGMENTS: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];

/// Yamagandam segment per weekday: Sun=5, Mon=4, Tue=3, Wed=2, Thu=1, Fri=7, Sat=6.
pub const YAMAGANDAM_SEGMENTS: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Kuligai segment per weekday: Sun=7, Mon=6, Tue=5, Wed=4, Thu=3, Fri=2, Sat=1.
pub const KULIGAI_SEGMENTS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// A wall-clock range: (start hour, start minute, end hour, end minute),
/// on the sunrise's calendar day in the request timezone.
pub type ClockRange = (u32, u32, u32, u32);

/// Two Nalla Neram wall-clock ranges per weekday.
///
/// Conventional almanac values; each range is clipped to the actual
/// [sunrise, sunset] daylight span and dropped if the clip collapses it.
pub const NALLA_NERAM_CLOCKS: [[ClockRange; 2]; 7] = [
    [(9, 0, 10, 30), (15, 0, 16, 30)],  // Sunday
    [(7, 30, 9, 0), (13, 30, 15, 0)],   // Monday
    [(10, 30, 12, 0), (16, 30, 18, 0)], // Tuesday
    [(6, 0, 7, 30), (12, 0, 13, 30)],   // Wednesday
    [(9, 0, 10, 30), (13, 30, 15, 0)],  // Thursday
    [(7, 30, 9, 0), (12, 0, 13, 30)],   // Friday
    [(6, 0, 7, 30), (15, 0, 16, 30)],   // Saturday
];

/// Rahukaalam segment number (1-8) for a weekday index.
pub fn rahukaalam_segment_for_weekday(weekday: usize) -> u8 {
    RAHUKAALAM_SEGMENTS[weekday % 7]
}

/// Yamagandam segment number (1-8) for a weekday index.
pub fn yamagandam_segment_for_weekday(weekday: usize) -> u8 {
    YAMAGANDAM_SEGMENTS[weekday % 7]
}

/// Kuligai segment number (1-8) for a weekday index.
pub fn kuligai_segment_for_weekday(weekday: usize) -> u8 {
    KULIGAI_SEGMENTS[weekday % 7]
}

/// Nalla Neram wall-clock ranges for a weekday index.
pub fn nalla_neram_clocks_for_weekday(weekday: usize) -> &'static [ClockRange; 2] {
    &NALLA_NERAM_CLOCKS[weekday % 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_numbers_in_range() {
        for day in 0..7 {
            for seg in [
                rahukaalam_segment_for_weekday(day),
                yamagandam_segment_for_weekday(day),
                kuligai_segment_for_weekday(day),
            ] {
                assert!((1..=DAY_SEGMENT_COUNT).contains(&seg), "weekday {day}");
            }
        }
    }

    #[test]
    fn three_timings_never_share_a_segment() {
        for day in 0..7 {
            let r = rahukaalam_segment_for_weekday(day);
            let y = yamagandam_segment_for_weekday(day);
            let k = kuligai_segment_for_weekday(day);
            assert!(r != y && y != k && r != k, "weekday {day}");
        }
    }

    #[test]
    fn traditional_spot_values() {
        // Sunday Rahukaalam is the 8th segment (4:30-6:00 pm on a 6-to-6 day).
        assert_eq!(rahukaalam_segment_for_weekday(0), 8);
        // Monday Rahukaalam is the 2nd segment (7:30-9:00 am).
        assert_eq!(rahukaalam_segment_for_weekday(1), 2);
        // Thursday Yamagandam opens the day.
        assert_eq!(yamagandam_segment_for_weekday(4), 1);
        // Saturday Kuligai opens the day.
        assert_eq!(kuligai_segment_for_weekday(6), 1);
    }

    #[test]
    fn nalla_neram_ranges_well_formed() {
        for day in 0..7 {
            for &(sh, sm, eh, em) in nalla_neram_clocks_for_weekday(day) {
                assert!(sh < 24 && eh < 24 && sm < 60 && em < 60);
                assert!((eh, em) > (sh, sm), "weekday {day}");
            }
        }
    }
}
