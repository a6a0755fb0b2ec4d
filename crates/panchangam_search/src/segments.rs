//! Day segmentation: inauspicious segments, nalla neram, and gowri
//! windows between one sunrise and sunset.

use chrono::Datelike;
use panchangam_base::{
    DAY_SEGMENT_COUNT, gowri_pattern_for_weekday, kuligai_segment_for_weekday,
    nalla_neram_clocks_for_weekday, rahukaalam_segment_for_weekday, yamagandam_segment_for_weekday,
};
use panchangam_time::{TimeInstant, TimeInterval, local_instant};

use crate::types::{TimingKind, TimingWindow};

/// Boundary `k` (0..=8) of a day split into 8 equal parts.
///
/// Each boundary is an independent fraction of the whole span, so
/// boundary 8 is exactly sunset and adjacent segments share an edge
/// even when the span does not divide evenly.
fn segment_boundary(sunrise: TimeInstant, sunset: TimeInstant, k: u8) -> TimeInstant {
    sunrise + (sunset - sunrise) * k as i32 / DAY_SEGMENT_COUNT as i32
}

/// Span of the 1-based segment `number` on a day split into 8 equal parts.
fn segment_interval(sunrise: TimeInstant, sunset: TimeInstant, number: u8) -> Option<TimeInterval> {
    let start = segment_boundary(sunrise, sunset, number - 1);
    let end = segment_boundary(sunrise, sunset, number);
    TimeInterval::new(start, end)
}

/// All timing windows for one day, ordered by start instant.
///
/// The day runs sunrise to sunset; the weekday comes from the sunrise's
/// civil date (Sunday = 0). Callers must have rejected degenerate
/// daylight spans already; a non-positive span yields no windows here.
pub fn timing_windows(sunrise: TimeInstant, sunset: TimeInstant) -> Vec<TimingWindow> {
    let weekday = sunrise.weekday().num_days_from_sunday() as usize;
    let mut windows = Vec::new();

    let fixed = [
        (TimingKind::Rahukaalam, rahukaalam_segment_for_weekday(weekday)),
        (TimingKind::Yamagandam, yamagandam_segment_for_weekday(weekday)),
        (TimingKind::Kuligai, kuligai_segment_for_weekday(weekday)),
    ];
    for (kind, number) in fixed {
        if let Some(interval) = segment_interval(sunrise, sunset, number) {
            windows.push(TimingWindow { kind, interval });
        }
    }

    windows.extend(nalla_neram_windows(sunrise, sunset));
    windows.extend(gowri_windows(sunrise, sunset));
    windows.sort_by_key(|w| (w.interval.start, w.interval.end));
    windows
}

/// Weekday nalla neram clock ranges clipped to the daylight span.
///
/// A range that falls entirely outside [sunrise, sunset], or collapses
/// when clipped, is dropped.
pub fn nalla_neram_windows(sunrise: TimeInstant, sunset: TimeInstant) -> Vec<TimingWindow> {
    let weekday = sunrise.weekday().num_days_from_sunday() as usize;
    let date = sunrise.date_naive();
    let tz = sunrise.timezone();

    let mut windows = Vec::new();
    for &(start_h, start_m, end_h, end_m) in nalla_neram_clocks_for_weekday(weekday) {
        let Ok(start) = local_instant(date, start_h, start_m, tz) else {
            continue;
        };
        let Ok(end) = local_instant(date, end_h, end_m, tz) else {
            continue;
        };
        let clipped_start = start.max(sunrise);
        let clipped_end = end.min(sunset);
        if let Some(interval) = TimeInterval::new(clipped_start, clipped_end) {
            windows.push(TimingWindow {
                kind: TimingKind::NallaNeram,
                interval,
            });
        }
    }
    windows
}

/// Auspicious gowri segments for the day (5 of 8 by table construction).
pub fn gowri_windows(sunrise: TimeInstant, sunset: TimeInstant) -> Vec<TimingWindow> {
    let weekday = sunrise.weekday().num_days_from_sunday() as usize;
    let pattern = gowri_pattern_for_weekday(weekday);

    let mut windows = Vec::new();
    for (i, state) in pattern.iter().enumerate() {
        if !state.is_auspicious() {
            continue;
        }
        if let Some(interval) = segment_interval(sunrise, sunset, i as u8 + 1) {
            windows.push(TimingWindow {
                kind: TimingKind::Gowri,
                interval,
            });
        }
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    fn kolkata(d: u32, h: u32, m: u32) -> TimeInstant {
        Tz::Asia__Kolkata
            .with_ymd_and_hms(2026, 1, d, h, m, 0)
            .unwrap()
    }

    #[test]
    fn sunday_rahukaalam_is_last_segment() {
        // 2026-01-04 is a Sunday; 06:00-18:00 gives 90-minute segments.
        let windows = timing_windows(kolkata(4, 6, 0), kolkata(4, 18, 0));
        let rahu = windows
            .iter()
            .find(|w| w.kind == TimingKind::Rahukaalam)
            .unwrap();
        assert_eq!(rahu.interval.start, kolkata(4, 16, 30));
        assert_eq!(rahu.interval.end, kolkata(4, 18, 0));
    }

    #[test]
    fn monday_rahukaalam_is_second_segment() {
        let windows = timing_windows(kolkata(5, 6, 0), kolkata(5, 18, 0));
        let rahu = windows
            .iter()
            .find(|w| w.kind == TimingKind::Rahukaalam)
            .unwrap();
        assert_eq!(rahu.interval.start, kolkata(5, 7, 30));
        assert_eq!(rahu.interval.end, kolkata(5, 9, 0));
    }

    #[test]
    fn inauspicious_segments_do_not_overlap() {
        let windows = timing_windows(kolkata(6, 6, 0), kolkata(6, 18, 0));
        let spans: Vec<_> = windows
            .iter()
            .filter(|w| !w.kind.is_auspicious())
            .map(|w| w.interval)
            .collect();
        assert_eq!(spans.len(), 3);
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                assert!(a.end <= b.start || b.end <= a.start);
            }
        }
    }

    #[test]
    fn gowri_yields_five_windows_inside_daylight() {
        for day in 4..=10 {
            let sunrise = kolkata(day, 6, 0);
            let sunset = kolkata(day, 18, 0);
            let windows = gowri_windows(sunrise, sunset);
            assert_eq!(windows.len(), 5, "day {day}");
            for w in &windows {
                assert!(w.interval.start >= sunrise);
                assert!(w.interval.end <= sunset);
            }
        }
    }

    #[test]
    fn gowri_segments_tile_without_gaps() {
        // All 8 segments (auspicious or not) tile the daylight span.
        let sunrise = kolkata(4, 6, 0);
        let sunset = kolkata(4, 18, 0);
        let mut edge = sunrise;
        for n in 1..=DAY_SEGMENT_COUNT {
            let seg = segment_interval(sunrise, sunset, n).unwrap();
            assert_eq!(seg.start, edge);
            edge = seg.end;
        }
        assert_eq!(edge, sunset);
    }

    #[test]
    fn segments_tile_uneven_daylight_span() {
        // 12h 3s of daylight does not divide into 8 whole seconds.
        let sunrise = kolkata(4, 6, 0);
        let sunset = Tz::Asia__Kolkata
            .with_ymd_and_hms(2026, 1, 4, 18, 0, 3)
            .unwrap();
        let mut edge = sunrise;
        for n in 1..=DAY_SEGMENT_COUNT {
            let seg = segment_interval(sunrise, sunset, n).unwrap();
            assert_eq!(seg.start, edge, "segment {n}");
            edge = seg.end;
        }
        assert_eq!(edge, sunset);
    }

    #[test]
    fn nalla_neram_clipped_to_daylight() {
        // Saturday table opens at 06:00; a 06:30 sunrise clips it.
        let windows = nalla_neram_windows(kolkata(10, 6, 30), kolkata(10, 18, 0));
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].interval.start, kolkata(10, 6, 30));
        assert_eq!(windows[0].interval.end, kolkata(10, 7, 30));
    }

    #[test]
    fn nalla_neram_outside_daylight_dropped() {
        // Tuesday's second range ends 18:00; a 16:30 sunset collapses it.
        let windows = nalla_neram_windows(kolkata(6, 6, 0), kolkata(6, 16, 30));
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].interval.start, kolkata(6, 10, 30));
        assert_eq!(windows[0].interval.end, kolkata(6, 12, 0));
    }
}
