//! The four angam calculators, all keyed off one sunrise instant.
//!
//! Nakshatram, thithi, and karanam find their end times by bisection on
//! a monotonic angle function. Yogam scans linearly in 30-minute steps
//! instead, because the Sun+Moon sum is non-monotonic near its wrap
//! boundary and bisection's bracket test is unreliable there.

use chrono::Duration;
use panchangam_angle::normalize_360;
use panchangam_base::{
    KARANAM_SPAN_DEG, NAKSHATRAM_SPAN_DEG, THITHI_SPAN_DEG, karanam_from_angle,
    nakshatram_from_longitude, thithi_from_angle, yogam_from_sum,
};
use panchangam_ephem::{EphemerisError, EphemerisProvider};
use panchangam_time::TimeInstant;

use crate::solver::find_angle_crossing;
use crate::types::{KaranamInfo, NakshatramInfo, ThithiInfo, YogamInfo};

/// Rate assumed by the linear fallback, degrees per hour.
///
/// Roughly the Moon-Sun elongation rate; deliberately conservative for
/// the Moon itself, where overestimating the remaining time is
/// preferable to an end instant already in the past.
const FALLBACK_RATE_DEG_PER_HOUR: f64 = 0.5;

/// Step size of the yogam boundary scan.
fn yogam_scan_step() -> Duration {
    Duration::minutes(30)
}

/// Instant reached by advancing `remaining_deg` at the fallback rate.
fn linear_estimate(base: TimeInstant, remaining_deg: f64) -> TimeInstant {
    let seconds = remaining_deg / FALLBACK_RATE_DEG_PER_HOUR * 3600.0;
    base + Duration::seconds(seconds as i64)
}

/// Nakshatram at `sunrise`, with the instant the Moon leaves it.
///
/// End time comes from bisection over a 48h horizon; when no crossing
/// brackets (degenerate providers, stalled Moon), a linear estimate of
/// the full remaining arc is substituted and flagged.
pub fn nakshatram_at_sunrise<P: EphemerisProvider + ?Sized>(
    provider: &P,
    sunrise: TimeInstant,
) -> Result<NakshatramInfo, EphemerisError> {
    let longitude = provider.moon_longitude(sunrise)?;
    let pos = nakshatram_from_longitude(longitude);
    let target = normalize_360((pos.index as f64 + 1.0) * NAKSHATRAM_SPAN_DEG);

    let crossing = find_angle_crossing(
        |t| provider.moon_longitude(t),
        target,
        sunrise,
        Duration::hours(48),
    )?;
    let (end, estimated) = match crossing {
        Some(instant) => (instant, false),
        None => (linear_estimate(sunrise, normalize_360(target - longitude)), true),
    };

    Ok(NakshatramInfo {
        nakshatram: pos.nakshatram,
        index: pos.index,
        lord: pos.lord,
        end,
        estimated,
    })
}

/// Thithi at `sunrise`, with the instant the elongation leaves it.
///
/// End time comes from bisection over a 48h horizon; the fallback
/// estimate caps the remaining arc at one thithi span.
pub fn thithi_at_sunrise<P: EphemerisProvider + ?Sized>(
    provider: &P,
    sunrise: TimeInstant,
) -> Result<ThithiInfo, EphemerisError> {
    let angle = provider.moon_sun_angle(sunrise)?;
    let pos = thithi_from_angle(angle);
    let target = normalize_360(pos.number as f64 * THITHI_SPAN_DEG);

    let crossing = find_angle_crossing(
        |t| provider.moon_sun_angle(t),
        target,
        sunrise,
        Duration::hours(48),
    )?;
    let (end, estimated) = match crossing {
        Some(instant) => (instant, false),
        None => {
            let remaining = normalize_360(target - angle).min(THITHI_SPAN_DEG);
            (linear_estimate(sunrise, remaining), true)
        }
    };

    Ok(ThithiInfo {
        name: pos.name,
        number: pos.number,
        paksha: pos.paksha,
        number_in_paksha: pos.number_in_paksha,
        end,
        estimated,
    })
}

/// Karanam at `sunrise`, with the instant the elongation leaves it.
///
/// Karanams last about half a day, so the bisection horizon is 24h; the
/// fallback estimate caps the remaining arc at one karanam span.
pub fn karanam_at_sunrise<P: EphemerisProvider + ?Sized>(
    provider: &P,
    sunrise: TimeInstant,
) -> Result<KaranamInfo, EphemerisError> {
    let angle = provider.moon_sun_angle(sunrise)?;
    let pos = karanam_from_angle(angle);
    let target = normalize_360(pos.number as f64 * KARANAM_SPAN_DEG);

    let crossing = find_angle_crossing(
        |t| provider.moon_sun_angle(t),
        target,
        sunrise,
        Duration::hours(24),
    )?;
    let (end, estimated) = match crossing {
        Some(instant) => (instant, false),
        None => {
            let remaining = normalize_360(target - angle).min(KARANAM_SPAN_DEG);
            (linear_estimate(sunrise, remaining), true)
        }
    };

    Ok(KaranamInfo {
        name: pos.name,
        number: pos.number,
        vishti: pos.vishti,
        end,
        estimated,
    })
}

/// Yogam at `sunrise`, with both boundary instants.
///
/// Scans outward in 30-minute steps until the yogam index changes:
/// backward up to 24h for the start, forward up to 48h for the end.
/// When a scan exhausts its horizon the boundary defaults (start to
/// `sunrise`, end to `sunrise` + 24h) and the result is flagged.
pub fn yogam_at_sunrise<P: EphemerisProvider + ?Sized>(
    provider: &P,
    sunrise: TimeInstant,
) -> Result<YogamInfo, EphemerisError> {
    let sum = provider.sun_moon_sum(sunrise)?;
    let pos = yogam_from_sum(sum);
    let step = yogam_scan_step();

    // Backward: the start is the last sampled instant still inside
    // this yogam.
    let mut start = None;
    let mut cursor = sunrise;
    for _ in 0..48 {
        let earlier = cursor - step;
        let index = yogam_from_sum(provider.sun_moon_sum(earlier)?).index;
        if index != pos.index {
            start = Some(cursor);
            break;
        }
        cursor = earlier;
    }

    // Forward: the end is the first sampled instant past the boundary.
    let mut end = None;
    let mut cursor = sunrise;
    for _ in 0..96 {
        cursor += step;
        let index = yogam_from_sum(provider.sun_moon_sum(cursor)?).index;
        if index != pos.index {
            end = Some(cursor);
            break;
        }
    }

    let estimated = start.is_none() || end.is_none();
    Ok(YogamInfo {
        yogam: pos.yogam,
        index: pos.index,
        kind: pos.kind,
        start: start.unwrap_or(sunrise),
        end: end.unwrap_or(sunrise + Duration::hours(24)),
        estimated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;
    use panchangam_base::{KaranamName, Nakshatram, Paksha, ThithiName, Yogam};
    use panchangam_ephem::{FixedEphemeris, MeanMotionEphemeris};

    fn sunrise() -> TimeInstant {
        Tz::Asia__Kolkata
            .with_ymd_and_hms(2026, 1, 4, 6, 0, 0)
            .unwrap()
    }

    #[test]
    fn nakshatram_solved_end_near_true_crossing() {
        // Moon at 10 deg moves at mean rate; Ashwini ends at 13.333 deg.
        let eph = MeanMotionEphemeris::anchored(sunrise(), 280.0, 10.0);
        let info = nakshatram_at_sunrise(&eph, sunrise()).unwrap();
        assert_eq!(info.nakshatram, Nakshatram::Ashwini);
        assert!(!info.estimated);
        let expected_days = (NAKSHATRAM_SPAN_DEG - 10.0) / eph.moon_rate_deg_per_day;
        let expected = sunrise() + Duration::seconds((expected_days * 86_400.0) as i64);
        assert!((info.end - expected).num_seconds().abs() <= 60);
    }

    #[test]
    fn nakshatram_falls_back_on_fixed_provider() {
        let eph = FixedEphemeris::new(280.0, 10.0);
        let info = nakshatram_at_sunrise(&eph, sunrise()).unwrap();
        assert!(info.estimated);
        assert!(info.end > sunrise());
    }

    #[test]
    fn thithi_number_and_end() {
        // Elongation 18 deg: thithi 2 (Dvitiya, Shukla), ends at 24 deg.
        let eph = MeanMotionEphemeris::anchored(sunrise(), 0.0, 18.0);
        let info = thithi_at_sunrise(&eph, sunrise()).unwrap();
        assert_eq!(info.number, 2);
        assert_eq!(info.name, ThithiName::Dvitiya);
        assert_eq!(info.paksha, Paksha::Shukla);
        assert!(!info.estimated);
        let rate = eph.moon_rate_deg_per_day - eph.sun_rate_deg_per_day;
        let expected = sunrise() + Duration::seconds((6.0 / rate * 86_400.0) as i64);
        assert!((info.end - expected).num_seconds().abs() <= 60);
    }

    #[test]
    fn thithi_fallback_is_capped_at_one_span() {
        let eph = FixedEphemeris::new(0.0, 18.0);
        let info = thithi_at_sunrise(&eph, sunrise()).unwrap();
        assert!(info.estimated);
        // 6 deg remaining at 0.5 deg/hour = 12 hours; never beyond the
        // 24-hour cap implied by one 12 deg span.
        let hours = (info.end - sunrise()).num_hours();
        assert!(hours <= 24, "estimate ran {hours}h");
    }

    #[test]
    fn karanam_number_and_vishti_flag() {
        // Elongation 44 deg: karanam 8, (8-2) % 7 = 6 -> Vishti.
        let eph = MeanMotionEphemeris::anchored(sunrise(), 0.0, 44.0);
        let info = karanam_at_sunrise(&eph, sunrise()).unwrap();
        assert_eq!(info.number, 8);
        assert_eq!(info.name, KaranamName::Vishti);
        assert!(info.vishti);
        assert!(!info.estimated);
    }

    #[test]
    fn karanam_fallback_is_capped_at_one_span() {
        let eph = FixedEphemeris::new(0.0, 44.0);
        let info = karanam_at_sunrise(&eph, sunrise()).unwrap();
        assert!(info.estimated);
        let hours = (info.end - sunrise()).num_hours();
        assert!(hours <= 12, "estimate ran {hours}h");
    }

    #[test]
    fn yogam_scan_finds_both_boundaries() {
        // Sum 140 deg sits mid-Vriddhi (index 10 covers 133.3-146.7).
        let eph = MeanMotionEphemeris::anchored(sunrise(), 70.0, 70.0);
        let info = yogam_at_sunrise(&eph, sunrise()).unwrap();
        assert_eq!(info.yogam, Yogam::Vriddhi);
        assert!(!info.estimated);
        assert!(info.start <= sunrise());
        assert!(info.end > sunrise());
        // Sum advances ~14.16 deg/day, so the whole yogam lasts under a day.
        assert!((info.end - info.start).num_hours() < 30);
    }

    #[test]
    fn yogam_defaults_on_fixed_provider() {
        let eph = FixedEphemeris::new(70.0, 70.0);
        let info = yogam_at_sunrise(&eph, sunrise()).unwrap();
        assert!(info.estimated);
        assert_eq!(info.start, sunrise());
        assert_eq!(info.end, sunrise() + Duration::hours(24));
    }
}
