//! Hebrew/Gregorian date snapshots over a shared absolute day index.
//!
//! The absolute index is the Rata Die count: day 1 is 0001-01-01 of the
//! proleptic Gregorian calendar. Hebrew months are numbered 1 = Nissan
//! through 7 = Tishrei to 12 = Adar and 13 = Adar II; the year number
//! increments at Tishrei.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::year::{days_elapsed, is_cheshvan_long, is_kislev_short, is_leap_year, months_in_year};

/// Absolute day of the epoch of the Hebrew calendar (the day before
/// 1 Tishrei of year 1 falls on `JEWISH_EPOCH + 2`).
pub const JEWISH_EPOCH: i64 = -1_373_429;

/// Largest Hebrew year the engine accepts.
pub const MAX_YEAR: i32 = 99_999;

pub const SUNDAY: u8 = 1;
pub const MONDAY: u8 = 2;
pub const TUESDAY: u8 = 3;
pub const WEDNESDAY: u8 = 4;
pub const THURSDAY: u8 = 5;
pub const FRIDAY: u8 = 6;
pub const SATURDAY: u8 = 7;

/// Errors produced by date construction and conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("{year}-{month}-{day} is not a valid Gregorian date")]
    InvalidGregorian { year: i32, month: u8, day: u8 },
    #[error("month {month} does not exist")]
    InvalidMonth { month: u8 },
    #[error("Adar II does not exist in common year {year}")]
    AdarIiInCommonYear { year: i32 },
    #[error("day {day} does not exist in {month:?} of year {year}")]
    InvalidDay {
        year: i32,
        month: JewishMonth,
        day: u8,
    },
    #[error("date is outside the supported year range 1..={MAX_YEAR}")]
    OutOfRange,
}

/// Months of the Hebrew year, numbered from Nissan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JewishMonth {
    Nissan = 1,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Teves,
    Shevat,
    Adar,
    AdarII,
}

impl JewishMonth {
    /// Month number, 1 = Nissan .. 13 = Adar II.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(month: u8) -> Result<Self, DateError> {
        use JewishMonth::*;
        Ok(match month {
            1 => Nissan,
            2 => Iyar,
            3 => Sivan,
            4 => Tammuz,
            5 => Av,
            6 => Elul,
            7 => Tishrei,
            8 => Cheshvan,
            9 => Kislev,
            10 => Teves,
            11 => Shevat,
            12 => Adar,
            13 => AdarII,
            _ => return Err(DateError::InvalidMonth { month }),
        })
    }

    /// Transliterated month name.
    pub fn name(self) -> &'static str {
        use JewishMonth::*;
        match self {
            Nissan => "Nissan",
            Iyar => "Iyar",
            Sivan => "Sivan",
            Tammuz => "Tammuz",
            Av => "Av",
            Elul => "Elul",
            Tishrei => "Tishrei",
            Cheshvan => "Cheshvan",
            Kislev => "Kislev",
            Teves => "Teves",
            Shevat => "Shevat",
            Adar => "Adar",
            AdarII => "Adar II",
        }
    }
}

/// Days in `month` of `year`.
pub fn month_length(year: i32, month: JewishMonth) -> u8 {
    use JewishMonth::*;
    match month {
        Iyar | Tammuz | Elul | Teves | AdarII => 29,
        Adar => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
        Cheshvan => {
            if is_cheshvan_long(year) {
                30
            } else {
                29
            }
        }
        Kislev => {
            if is_kislev_short(year) {
                29
            } else {
                30
            }
        }
        Nissan | Sivan | Av | Tishrei | Shevat => 30,
    }
}

/// Days from 1 Tishrei (inclusive, so 1 Tishrei is day 1) to the given date.
pub fn days_since_start_of_year(year: i32, month: JewishMonth, day: u8) -> i64 {
    let mut total = day as i64;
    let walk = |from: u8, to: u8, total: &mut i64| {
        for m in from..to {
            // `from..to` stays within 1..=13
            if let Ok(month) = JewishMonth::from_number(m) {
                *total += month_length(year, month) as i64;
            }
        }
    };
    if month < JewishMonth::Tishrei {
        walk(JewishMonth::Tishrei.number(), months_in_year(year) + 1, &mut total);
        walk(JewishMonth::Nissan.number(), month.number(), &mut total);
    } else {
        walk(JewishMonth::Tishrei.number(), month.number(), &mut total);
    }
    total
}

fn hebrew_to_abs(year: i32, month: JewishMonth, day: u8) -> i64 {
    days_elapsed(year) + days_since_start_of_year(year, month, day) + JEWISH_EPOCH
}

fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const GREGORIAN_MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn gregorian_month_length(year: i32, month: u8) -> u8 {
    if month == 2 && is_gregorian_leap_year(year) {
        29
    } else {
        GREGORIAN_MONTH_LENGTHS[(month - 1) as usize]
    }
}

fn gregorian_to_abs(year: i32, month: u8, day: u8) -> i64 {
    let mut total = day as i64;
    for m in 1..month {
        total += gregorian_month_length(year, m) as i64;
    }
    let prior = (year as i64) - 1;
    total + 365 * prior + prior.div_euclid(4) - prior.div_euclid(100) + prior.div_euclid(400)
}

fn abs_to_gregorian(abs: i64) -> (i32, u8, u8) {
    let mut year = ((abs * 400).div_euclid(146_097)) as i32;
    while gregorian_to_abs(year + 1, 1, 1) <= abs {
        year += 1;
    }
    let mut month = 1u8;
    while abs > gregorian_to_abs(year, month, gregorian_month_length(year, month)) {
        month += 1;
    }
    let day = (abs - gregorian_to_abs(year, month, 1) + 1) as u8;
    (year, month, day)
}

fn abs_to_hebrew(abs: i64) -> Result<(i32, JewishMonth, u8), DateError> {
    if abs < JEWISH_EPOCH + 2 {
        return Err(DateError::OutOfRange);
    }
    // Lower-bound estimate from the mean year length, then a short search.
    let mut year = ((abs - JEWISH_EPOCH) * 98_496 / 35_975_351).max(1) as i32;
    while hebrew_to_abs(year + 1, JewishMonth::Tishrei, 1) <= abs {
        year += 1;
    }
    if year > MAX_YEAR {
        return Err(DateError::OutOfRange);
    }
    let mut month = if abs < hebrew_to_abs(year, JewishMonth::Nissan, 1) {
        JewishMonth::Tishrei
    } else {
        JewishMonth::Nissan
    };
    while abs > hebrew_to_abs(year, month, month_length(year, month)) {
        // Never wraps: the year boundary check above pins `month`'s civil year.
        month = JewishMonth::from_number(month.number() + 1)?;
    }
    let day = (abs - hebrew_to_abs(year, month, 1) + 1) as u8;
    Ok((year, month, day))
}

/// A single day carrying its Hebrew and Gregorian representations.
///
/// The two calendars and the absolute index are kept consistent by every
/// constructor and mutation. Instances are independent; concurrent use only
/// requires that threads operate on distinct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HebrewDate {
    abs: i64,
    year: i32,
    month: JewishMonth,
    day: u8,
    gregorian_year: i32,
    gregorian_month: u8,
    gregorian_day: u8,
}

impl HebrewDate {
    /// Build from a Hebrew year, month and day. Nonexistent dates (day 30 of
    /// a 29-day month, Adar II in a common year) are rejected, not clamped.
    pub fn from_hebrew(year: i32, month: JewishMonth, day: u8) -> Result<Self, DateError> {
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(DateError::OutOfRange);
        }
        if month == JewishMonth::AdarII && !is_leap_year(year) {
            return Err(DateError::AdarIiInCommonYear { year });
        }
        if day < 1 || day > month_length(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        let abs = hebrew_to_abs(year, month, day);
        let (gy, gm, gd) = abs_to_gregorian(abs);
        Ok(HebrewDate {
            abs,
            year,
            month,
            day,
            gregorian_year: gy,
            gregorian_month: gm,
            gregorian_day: gd,
        })
    }

    /// Build from a proleptic Gregorian date.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) || day < 1 || day > gregorian_month_length(year, month) {
            return Err(DateError::InvalidGregorian { year, month, day });
        }
        Self::from_abs(gregorian_to_abs(year, month, day))
    }

    /// Build from an absolute day index.
    pub fn from_abs(abs: i64) -> Result<Self, DateError> {
        let (year, month, day) = abs_to_hebrew(abs)?;
        let (gy, gm, gd) = abs_to_gregorian(abs);
        Ok(HebrewDate {
            abs,
            year,
            month,
            day,
            gregorian_year: gy,
            gregorian_month: gm,
            gregorian_day: gd,
        })
    }

    pub fn abs_day(&self) -> i64 {
        self.abs
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> JewishMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn gregorian(&self) -> (i32, u8, u8) {
        (self.gregorian_year, self.gregorian_month, self.gregorian_day)
    }

    /// Day of week, 1 = Sunday .. 7 = Shabbos.
    pub fn day_of_week(&self) -> u8 {
        (self.abs.rem_euclid(7) + 1) as u8
    }

    /// Day count from 1 Tishrei of this Hebrew year (1 Tishrei = 1).
    pub fn days_since_start_of_year(&self) -> i64 {
        days_since_start_of_year(self.year, self.month, self.day)
    }

    /// Length of the current Hebrew year in days.
    pub fn year_length(&self) -> i64 {
        crate::year::year_length(self.year)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// The molad of this date's Hebrew month.
    pub fn molad(&self) -> crate::molad::Molad {
        crate::molad::molad(self.year, self.month)
    }

    /// True on the day of Birkas Hachamah, once per 28-year solar cycle.
    pub fn is_birkas_hachamah(&self) -> bool {
        crate::year::is_birkas_hachamah_day(
            days_elapsed(self.year) + self.days_since_start_of_year(),
        )
    }

    /// Advance this date by one day, updating both calendars in place
    /// without reconverting from the absolute index.
    pub fn forward(&mut self) {
        self.abs += 1;
        if self.gregorian_day < gregorian_month_length(self.gregorian_year, self.gregorian_month) {
            self.gregorian_day += 1;
        } else {
            self.gregorian_day = 1;
            if self.gregorian_month == 12 {
                self.gregorian_month = 1;
                self.gregorian_year += 1;
            } else {
                self.gregorian_month += 1;
            }
        }
        if self.day < month_length(self.year, self.month) {
            self.day += 1;
        } else {
            self.day = 1;
            self.month = match self.month {
                JewishMonth::Elul => {
                    self.year += 1;
                    JewishMonth::Tishrei
                }
                JewishMonth::Adar if !is_leap_year(self.year) => JewishMonth::Nissan,
                JewishMonth::AdarII => JewishMonth::Nissan,
                other => JewishMonth::from_number(other.number() + 1)
                    .unwrap_or(JewishMonth::Nissan),
            };
        }
    }

    /// Move this date back by one day, updating both calendars in place.
    pub fn back(&mut self) {
        self.abs -= 1;
        if self.gregorian_day > 1 {
            self.gregorian_day -= 1;
        } else {
            if self.gregorian_month == 1 {
                self.gregorian_month = 12;
                self.gregorian_year -= 1;
            } else {
                self.gregorian_month -= 1;
            }
            self.gregorian_day = gregorian_month_length(self.gregorian_year, self.gregorian_month);
        }
        if self.day > 1 {
            self.day -= 1;
        } else {
            self.month = match self.month {
                JewishMonth::Tishrei => {
                    self.year -= 1;
                    JewishMonth::Elul
                }
                JewishMonth::Nissan if is_leap_year(self.year) => JewishMonth::AdarII,
                JewishMonth::Nissan => JewishMonth::Adar,
                other => JewishMonth::from_number(other.number() - 1)
                    .unwrap_or(JewishMonth::Tishrei),
            };
            self.day = month_length(self.year, self.month);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_lines_up() {
        let first = HebrewDate::from_hebrew(1, JewishMonth::Tishrei, 1).unwrap();
        assert_eq!(first.abs_day(), JEWISH_EPOCH + 2);
    }

    #[test]
    fn rejects_nonexistent_days() {
        // 5777 is a 353-day year, so both Cheshvan and Kislev run 29 days.
        assert!(HebrewDate::from_hebrew(5777, JewishMonth::Cheshvan, 30).is_err());
        assert!(HebrewDate::from_hebrew(5777, JewishMonth::Kislev, 30).is_err());
        assert!(HebrewDate::from_hebrew(5777, JewishMonth::Iyar, 30).is_err());
        assert_eq!(
            HebrewDate::from_hebrew(5770, JewishMonth::AdarII, 1),
            Err(DateError::AdarIiInCommonYear { year: 5770 })
        );
        assert!(HebrewDate::from_hebrew(5771, JewishMonth::AdarII, 29).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            HebrewDate::from_hebrew(0, JewishMonth::Tishrei, 1),
            Err(DateError::OutOfRange)
        );
        assert_eq!(HebrewDate::from_abs(JEWISH_EPOCH), Err(DateError::OutOfRange));
        assert!(HebrewDate::from_gregorian(2024, 2, 30).is_err());
        assert!(HebrewDate::from_gregorian(2023, 2, 29).is_err());
        assert!(HebrewDate::from_gregorian(2024, 2, 29).is_ok());
    }

    #[test]
    fn gregorian_round_trip_around_leap_days() {
        for (y, m, d) in [(2000, 2, 29), (1900, 3, 1), (2024, 12, 31), (1, 1, 1)] {
            let date = HebrewDate::from_gregorian(y, m, d).unwrap();
            assert_eq!(date.gregorian(), (y, m, d));
            assert_eq!(HebrewDate::from_abs(date.abs_day()).unwrap(), date);
        }
        assert_eq!(HebrewDate::from_gregorian(1, 1, 1).unwrap().abs_day(), 1);
    }

    #[test]
    fn day_of_week_anchor() {
        // 2000-01-01 was a Saturday.
        let date = HebrewDate::from_gregorian(2000, 1, 1).unwrap();
        assert_eq!(date.day_of_week(), SATURDAY);
    }
}
