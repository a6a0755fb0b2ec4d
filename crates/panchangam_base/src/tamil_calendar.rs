//! Tamil solar calendar mapping.
//!
//! The Tamil calendar is solar: each month corresponds to the Sun's
//! transit of one rasi (30 degree zodiac sign), the year begins when
//! the Sun enters Mesha in mid-April, and year names repeat on a
//! 60-year cycle.

use chrono::{Datelike, NaiveDate, Weekday};
use panchangam_angle::normalize_360;
use serde::Serialize;

/// Number of Tamil months.
pub const TAMIL_MONTH_COUNT: u8 = 12;

/// Gregorian year whose Tamil year (from mid-April) is Prabhava,
/// the first name of the 60-year cycle.
pub const TAMIL_CYCLE_EPOCH_YEAR: i32 = 1987;

/// The Tamil months, in rasi order from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TamilMonth {
    Chithirai,
    Vaikasi,
    Aani,
    Aadi,
    Aavani,
    Purattasi,
    Aippasi,
    Karthigai,
    Margazhi,
    Thai,
    Maasi,
    Panguni,
}

/// All Tamil months in order. Index matches [`TamilMonth::index`].
pub const ALL_TAMIL_MONTHS: [TamilMonth; 12] = [
    TamilMonth::Chithirai,
    TamilMonth::Vaikasi,
    TamilMonth::Aani,
    TamilMonth::Aadi,
    TamilMonth::Aavani,
    TamilMonth::Purattasi,
    TamilMonth::Aippasi,
    TamilMonth::Karthigai,
    TamilMonth::Margazhi,
    TamilMonth::Thai,
    TamilMonth::Maasi,
    TamilMonth::Panguni,
];

impl TamilMonth {
    /// Zero-based index of this month (Chithirai = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English transliteration of the month name.
    pub const fn name(self) -> &'static str {
        match self {
            TamilMonth::Chithirai => "Chithirai",
            TamilMonth::Vaikasi => "Vaikasi",
            TamilMonth::Aani => "Aani",
            TamilMonth::Aadi => "Aadi",
            TamilMonth::Aavani => "Aavani",
            TamilMonth::Purattasi => "Purattasi",
            TamilMonth::Aippasi => "Aippasi",
            TamilMonth::Karthigai => "Karthigai",
            TamilMonth::Margazhi => "Margazhi",
            TamilMonth::Thai => "Thai",
            TamilMonth::Maasi => "Maasi",
            TamilMonth::Panguni => "Panguni",
        }
    }

    /// Approximate (Gregorian month, day) when the Sun enters this
    /// month's rasi.
    pub const fn gregorian_start(self) -> (u32, u32) {
        match self {
            TamilMonth::Chithirai => (4, 14),
            TamilMonth::Vaikasi => (5, 15),
            TamilMonth::Aani => (6, 15),
            TamilMonth::Aadi => (7, 17),
            TamilMonth::Aavani => (8, 17),
            TamilMonth::Purattasi => (9, 17),
            TamilMonth::Aippasi => (10, 18),
            TamilMonth::Karthigai => (11, 17),
            TamilMonth::Margazhi => (12, 16),
            TamilMonth::Thai => (1, 15),
            TamilMonth::Maasi => (2, 13),
            TamilMonth::Panguni => (3, 15),
        }
    }
}

/// The Tamil weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TamilWeekday {
    Nyairu,
    Thingal,
    Sevvai,
    Budhan,
    Viyazhan,
    Velli,
    Sani,
}

/// All Tamil weekdays, Sunday = index 0.
pub const ALL_TAMIL_WEEKDAYS: [TamilWeekday; 7] = [
    TamilWeekday::Nyairu,
    TamilWeekday::Thingal,
    TamilWeekday::Sevvai,
    TamilWeekday::Budhan,
    TamilWeekday::Viyazhan,
    TamilWeekday::Velli,
    TamilWeekday::Sani,
];

impl TamilWeekday {
    /// Zero-based index with Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English transliteration of the weekday name.
    pub const fn name(self) -> &'static str {
        match self {
            TamilWeekday::Nyairu => "Nyairu",
            TamilWeekday::Thingal => "Thingal",
            TamilWeekday::Sevvai => "Sevvai",
            TamilWeekday::Budhan => "Budhan",
            TamilWeekday::Viyazhan => "Viyazhan",
            TamilWeekday::Velli => "Velli",
            TamilWeekday::Sani => "Sani",
        }
    }
}

/// The 60 names of the Tamil year cycle, Prabhava first.
pub const TAMIL_YEAR_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajotpatti",
    "Angirasa",
    "Srimukha",
    "Bhava",
    "Yuva",
    "Dhatu",
    "Eeshwara",
    "Vehudhanya",
    "Pramathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Tarana",
    "Parthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Parabhava",
    "Plavanga",
    "Kilaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paritapi",
    "Pramadeecha",
    "Ananda",
    "Rakshasa",
    "Nala",
    "Pingala",
    "Kalayukti",
    "Siddharthi",
    "Raudra",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgari",
    "Raktakshi",
    "Krodhana",
    "Akshaya",
];

/// Tamil month for the Sun's ecliptic longitude at sunrise.
///
/// The Sun at 0 degrees is in Mesha, which maps to Chithirai; each
/// rasi spans 30 degrees.
pub fn tamil_month_from_longitude(sun_longitude_deg: f64) -> TamilMonth {
    let lon = normalize_360(sun_longitude_deg);
    let rasi = (lon / 30.0) as usize % 12;
    ALL_TAMIL_MONTHS[rasi]
}

/// Day of the Tamil month (1-based) for a Gregorian date.
///
/// Counts from the month's approximate Gregorian start date, using the
/// previous Gregorian year's start when the month began before the
/// given date's calendar year. The result is clamped to 1..=32 since
/// Tamil months run 29 to 32 days.
pub fn tamil_day_of_month(date: NaiveDate, month: TamilMonth) -> u8 {
    let (start_month, start_day) = month.gregorian_start();

    let mut start_year = date.year();
    if start_month > date.month() || (start_month == date.month() && start_day > date.day()) {
        start_year -= 1;
    }

    let month_start = NaiveDate::from_ymd_opt(start_year, start_month, start_day)
        .or_else(|| NaiveDate::from_ymd_opt(start_year, start_month, start_day.min(28)));
    let Some(month_start) = month_start else {
        return 1;
    };

    let day = (date - month_start).num_days() + 1;
    day.clamp(1, 32) as u8
}

/// Name of the Tamil year containing a Gregorian date.
///
/// The Tamil year changes at the new year in mid-April; dates before
/// April 14 belong to the previous cycle year. 1987 CE maps to
/// Prabhava per the South Indian reckoning of the Jupiter cycle.
pub fn tamil_year_name_for(date: NaiveDate) -> &'static str {
    let mut year = date.year();
    if date.month() < 4 || (date.month() == 4 && date.day() < 14) {
        year -= 1;
    }

    let position = (year - TAMIL_CYCLE_EPOCH_YEAR).rem_euclid(60) as usize;
    TAMIL_YEAR_NAMES[position]
}

/// Tamil weekday for a Gregorian weekday.
pub fn tamil_weekday_for(weekday: Weekday) -> TamilWeekday {
    ALL_TAMIL_WEEKDAYS[weekday.num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn months_cover_the_zodiac() {
        for (i, month) in ALL_TAMIL_MONTHS.iter().enumerate() {
            assert_eq!(month.index() as usize, i);
            let mid = i as f64 * 30.0 + 15.0;
            assert_eq!(tamil_month_from_longitude(mid), *month);
        }
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(tamil_month_from_longitude(0.0), TamilMonth::Chithirai);
        assert_eq!(tamil_month_from_longitude(29.999), TamilMonth::Chithirai);
        assert_eq!(tamil_month_from_longitude(30.0), TamilMonth::Vaikasi);
        assert_eq!(tamil_month_from_longitude(359.999), TamilMonth::Panguni);
    }

    #[test]
    fn month_wraps_unnormalized_longitudes() {
        assert_eq!(tamil_month_from_longitude(-1.0), TamilMonth::Panguni);
        assert_eq!(tamil_month_from_longitude(360.0), TamilMonth::Chithirai);
        assert_eq!(tamil_month_from_longitude(405.0), TamilMonth::Vaikasi);
    }

    #[test]
    fn day_counts_from_month_start() {
        // Tamil New Year itself is day 1 of Chithirai.
        assert_eq!(tamil_day_of_month(date(2026, 4, 14), TamilMonth::Chithirai), 1);
        assert_eq!(tamil_day_of_month(date(2026, 4, 20), TamilMonth::Chithirai), 7);
        assert_eq!(tamil_day_of_month(date(2026, 5, 14), TamilMonth::Chithirai), 31);
    }

    #[test]
    fn day_crosses_gregorian_year_boundary() {
        // Margazhi starts Dec 16; a January date counts from the
        // previous Gregorian year.
        assert_eq!(tamil_day_of_month(date(2026, 1, 5), TamilMonth::Margazhi), 21);
        assert_eq!(tamil_day_of_month(date(2025, 12, 16), TamilMonth::Margazhi), 1);
    }

    #[test]
    fn day_clamped_to_month_length() {
        // Far-off dates clamp instead of overflowing.
        assert_eq!(tamil_day_of_month(date(2026, 8, 1), TamilMonth::Chithirai), 32);
    }

    #[test]
    fn year_name_at_epoch() {
        assert_eq!(tamil_year_name_for(date(1987, 4, 14)), "Prabhava");
        assert_eq!(tamil_year_name_for(date(1988, 4, 14)), "Vibhava");
    }

    #[test]
    fn year_name_before_new_year_uses_previous_cycle_year() {
        assert_eq!(tamil_year_name_for(date(1988, 4, 13)), "Prabhava");
        assert_eq!(tamil_year_name_for(date(1988, 1, 1)), "Prabhava");
    }

    #[test]
    fn year_name_wraps_after_sixty_years() {
        assert_eq!(tamil_year_name_for(date(2047, 4, 14)), "Prabhava");
        assert_eq!(tamil_year_name_for(date(1927, 4, 14)), "Prabhava");
    }

    #[test]
    fn year_name_for_recent_dates() {
        // 2025-26 Tamil year (index (2025-1987) % 60 = 38) is Vishvavasu.
        assert_eq!(tamil_year_name_for(date(2025, 6, 1)), "Vishvavasu");
        assert_eq!(tamil_year_name_for(date(2026, 1, 4)), "Vishvavasu");
    }

    #[test]
    fn weekdays_map_sunday_first() {
        assert_eq!(tamil_weekday_for(Weekday::Sun), TamilWeekday::Nyairu);
        assert_eq!(tamil_weekday_for(Weekday::Mon), TamilWeekday::Thingal);
        assert_eq!(tamil_weekday_for(Weekday::Sat), TamilWeekday::Sani);
        // 2026-01-04 is a Sunday.
        let d = date(2026, 1, 4);
        assert_eq!(tamil_weekday_for(d.weekday()), TamilWeekday::Nyairu);
    }
}
