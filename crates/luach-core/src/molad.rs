//! Lunar conjunction (molad) arithmetic in chalakim.
//!
//! All quantities are exact integers. An hour holds 1080 chalakim, a day
//! 25920, and one mean lunation is 29d 12h 793c. The count starts at molad
//! tohu (BaHaRaD): Monday night, 5 hours and 204 chalakim into the day.

use crate::hebrew_date::{HebrewDate, JEWISH_EPOCH, JewishMonth};
use crate::year::is_leap_year;

pub const CHALAKIM_PER_MINUTE: i64 = 18;
pub const CHALAKIM_PER_HOUR: i64 = 1080;
pub const CHALAKIM_PER_DAY: i64 = 24 * CHALAKIM_PER_HOUR;
/// 29 days, 12 hours and 793 chalakim.
pub const CHALAKIM_PER_MONTH: i64 = 29 * CHALAKIM_PER_DAY + 12 * CHALAKIM_PER_HOUR + 793;
/// Offset of molad tohu from the start of day 0 of the elapsed-day count.
pub const CHALAKIM_MOLAD_TOHU: i64 = CHALAKIM_PER_DAY + 5 * CHALAKIM_PER_HOUR + 204;

/// A molad instant: the day it falls on plus the offset into that day.
///
/// Hours are counted from the 6 PM evening start of the Hebrew day, so hour 0
/// is the first hour of the night and hour 6 is midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    abs_day: i64,
    hours: u8,
    chalakim: u16,
}

impl Molad {
    /// Absolute day index the molad falls on.
    pub fn abs_day(&self) -> i64 {
        self.abs_day
    }

    /// Hours into the day, 0..=23, from the evening start of the day.
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Chalakim past the hour, 0..=1079.
    pub fn chalakim(&self) -> u16 {
        self.chalakim
    }

    /// Minutes past the hour, 0..=59 (one minute is 18 chalakim).
    pub fn minutes(&self) -> u8 {
        (self.chalakim as i64 / CHALAKIM_PER_MINUTE) as u8
    }

    /// Chalakim past the minute, 0..=17.
    pub fn chalakim_past_minute(&self) -> u8 {
        (self.chalakim as i64 % CHALAKIM_PER_MINUTE) as u8
    }

    /// The Hebrew calendar day the molad falls on.
    pub fn date(&self) -> Option<HebrewDate> {
        HebrewDate::from_abs(self.abs_day).ok()
    }
}

/// Ordinal of `month` counted from Tishrei (Tishrei = 1).
pub(crate) fn month_ordinal_from_tishrei(year: i32, month: JewishMonth) -> i64 {
    let m = month.number() as i64;
    if month >= JewishMonth::Tishrei {
        m - JewishMonth::Tishrei.number() as i64 + 1
    } else {
        m + if is_leap_year(year) { 7 } else { 6 }
    }
}

/// Chalakim elapsed from molad tohu to the molad of `month` in `year`.
///
/// Months are counted through complete 19-year Metonic cycles (235 lunations
/// each) plus the months of the partial cycle.
pub fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> i64 {
    let month_of_year = month_ordinal_from_tishrei(year, month);
    let prior = (year as i64) - 1;
    let cycles = prior.div_euclid(19);
    let remainder = prior.rem_euclid(19);
    let months =
        235 * cycles + 12 * remainder + (7 * remainder + 1).div_euclid(19) + (month_of_year - 1);
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months
}

/// The molad of `month` in `year`.
pub fn molad(year: i32, month: JewishMonth) -> Molad {
    let chalakim = chalakim_since_molad_tohu(year, month);
    let day = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);
    Molad {
        abs_day: day + JEWISH_EPOCH + 1,
        hours: (parts / CHALAKIM_PER_HOUR) as u8,
        chalakim: (parts % CHALAKIM_PER_HOUR) as u16,
    }
}
