//! Year-level arithmetic: leap years, the dechiyos, year length and kviah.

use serde::{Deserialize, Serialize};

use crate::hebrew_date::JewishMonth;
use crate::molad::{CHALAKIM_PER_DAY, chalakim_since_molad_tohu};

/// Dechiya 1 threshold: molad at or after noon pushes Rosh Hashana a day.
const MOLAD_ZAKEN_PARTS: i64 = 19_440;
/// Dechiya 3 (GaTRaD): Tuesday molad at or after 9h 204c in a common year.
const GATRAD_PARTS: i64 = 9_924;
/// Dechiya 4 (BeTuTaKFoT): Monday molad at or after 15h 589c following a leap year.
const BETUTAKFOT_PARTS: i64 = 16_789;

/// Days in the 28-year solar cycle (28 × 365.25, exact in quarter days).
const SOLAR_CYCLE_DAYS: i64 = 10_227;

/// True when `year` is one of the seven leap years of its 19-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    ((7 * year as i64) + 1).rem_euclid(19) < 7
}

/// Number of months in the year: 13 in a leap year, otherwise 12.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch of the calendar to Rosh Hashana of `year`, after the
/// four dechiyos.
pub fn days_elapsed(year: i32) -> i64 {
    let chalakim = chalakim_since_molad_tohu(year, JewishMonth::Tishrei);
    let molad_day = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let molad_parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);
    let mut rosh = molad_day;
    // Dechiyos 1, 3 and 4 each push Rosh Hashana off the molad day.
    if molad_parts >= MOLAD_ZAKEN_PARTS
        || (molad_day.rem_euclid(7) == 2 && molad_parts >= GATRAD_PARTS && !is_leap_year(year))
        || (molad_day.rem_euclid(7) == 1
            && molad_parts >= BETUTAKFOT_PARTS
            && is_leap_year(year - 1))
    {
        rosh += 1;
    }
    // Dechiya 2: lo ADU rosh. Rosh Hashana never falls Sunday, Wednesday or Friday.
    if matches!(rosh.rem_euclid(7), 0 | 3 | 5) {
        rosh += 1;
    }
    rosh
}

/// Length of `year` in days; one of 353, 354, 355, 383, 384 or 385.
pub fn year_length(year: i32) -> i64 {
    days_elapsed(year + 1) - days_elapsed(year)
}

/// True when Cheshvan has 30 days this year.
pub fn is_cheshvan_long(year: i32) -> bool {
    year_length(year) % 10 == 5
}

/// True when Kislev has 29 days this year.
pub fn is_kislev_short(year: i32) -> bool {
    year_length(year) % 10 == 3
}

/// The Cheshvan/Kislev length pattern of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearLengthPattern {
    /// Both Cheshvan and Kislev have 29 days (353/383-day year).
    Chaserim,
    /// Cheshvan 29, Kislev 30 (354/384-day year).
    Kesidran,
    /// Both Cheshvan and Kislev have 30 days (355/385-day year).
    Shelaimim,
}

impl YearLengthPattern {
    pub fn of(year: i32) -> Self {
        if is_cheshvan_long(year) {
            YearLengthPattern::Shelaimim
        } else if is_kislev_short(year) {
            YearLengthPattern::Chaserim
        } else {
            YearLengthPattern::Kesidran
        }
    }
}

/// The kviah triple that fully determines a year's shape.
///
/// Day-of-week values use 1 = Sunday .. 7 = Shabbos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kviah {
    pub rosh_hashana_day_of_week: u8,
    pub pattern: YearLengthPattern,
    pub pesach_day_of_week: u8,
}

impl Kviah {
    pub fn of(year: i32) -> Self {
        let rosh = days_elapsed(year);
        let pattern = YearLengthPattern::of(year);
        // 1 Tishrei to 15 Nissan, derived from the fixed winter month lengths.
        let to_pesach = 192
            + i64::from(is_cheshvan_long(year))
            - i64::from(is_kislev_short(year))
            + if is_leap_year(year) { 30 } else { 0 };
        Kviah {
            rosh_hashana_day_of_week: (rosh.rem_euclid(7) + 1) as u8,
            pattern,
            pesach_day_of_week: ((rosh + to_pesach - 1).rem_euclid(7) + 1) as u8,
        }
    }
}

/// True when the morning of this day carries Birkas Hachamah, the blessing
/// recited when the sun returns to its position at creation. The 28-year
/// cycle is exact in integer quarter-days, so no floating point is needed.
pub(crate) fn is_birkas_hachamah_day(days_elapsed_total: i64) -> bool {
    days_elapsed_total.rem_euclid(SOLAR_CYCLE_DAYS) == 172
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_the_metonic_cycle() {
        let positions: Vec<i32> = (5700..5719).filter(|&y| is_leap_year(y)).collect();
        let offsets: Vec<i32> = positions.iter().map(|y| y % 19).collect();
        assert_eq!(offsets, vec![0, 3, 6, 8, 11, 14, 17]);
        for base in [1, 3763, 5700] {
            assert_eq!((base..base + 19).filter(|&y| is_leap_year(y)).count(), 7);
        }
    }

    #[test]
    fn rosh_hashana_never_falls_on_adu() {
        for year in 5600..5900 {
            let dow = days_elapsed(year).rem_euclid(7) + 1;
            assert!(!matches!(dow, 1 | 4 | 6), "year {year} starts on {dow}");
        }
    }

    #[test]
    fn year_lengths_are_closed() {
        for year in 5600..5900 {
            let len = year_length(year);
            assert!(
                matches!(len, 353 | 354 | 355 | 383 | 384 | 385),
                "year {year} has impossible length {len}"
            );
            assert_eq!(is_leap_year(year), len > 360);
        }
    }

    #[test]
    fn kviah_pesach_weekday_is_consistent() {
        use crate::hebrew_date::HebrewDate;
        for year in 5700..5800 {
            let kviah = Kviah::of(year);
            let pesach = HebrewDate::from_hebrew(year, JewishMonth::Nissan, 15).unwrap();
            assert_eq!(kviah.pesach_day_of_week, pesach.day_of_week(), "year {year}");
            let rosh = HebrewDate::from_hebrew(year, JewishMonth::Tishrei, 1).unwrap();
            assert_eq!(kviah.rosh_hashana_day_of_week, rosh.day_of_week());
        }
    }
}
