//! Holiday, fast-day and observance facts derived from a date snapshot.
//!
//! Everything here is a pure function of `(month, day, day_of_week,
//! leap year, policy)`. The engine holds no state of its own; callers pass
//! the date and a [`CalendarPolicy`] on every query.

use serde::{Deserialize, Serialize};

use crate::hebrew_date::{
    FRIDAY, HebrewDate, JewishMonth, MONDAY, SATURDAY, SUNDAY, THURSDAY, TUESDAY, WEDNESDAY,
};
use crate::year::{is_kislev_short, is_leap_year};

/// Policy flags that change which days carry observances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarPolicy {
    /// Observe the Israeli schedule: single-day Yom Tov, no second days.
    pub in_israel: bool,
    /// Include the modern Israeli national days.
    pub use_modern_holidays: bool,
}

/// The observance carried by a day, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Holiday {
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    LagBaomer,
    ErevShavuos,
    Shavuos,
    SeventeenOfTammuz,
    TishaBeav,
    TuBeav,
    ErevRoshHashana,
    RoshHashana,
    FastOfGedalyah,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabba,
    SheminiAtzeres,
    SimchasTorah,
    Chanukah,
    TenthOfTeves,
    TuBeshvat,
    PurimKatan,
    ShushanPurimKatan,
    FastOfEsther,
    Purim,
    ShushanPurim,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
}

impl Holiday {
    /// Transliterated display name.
    pub fn name(self) -> &'static str {
        use Holiday::*;
        match self {
            ErevPesach => "Erev Pesach",
            Pesach => "Pesach",
            CholHamoedPesach => "Chol Hamoed Pesach",
            PesachSheni => "Pesach Sheni",
            LagBaomer => "Lag Baomer",
            ErevShavuos => "Erev Shavuos",
            Shavuos => "Shavuos",
            SeventeenOfTammuz => "Seventeenth of Tammuz",
            TishaBeav => "Tisha Beav",
            TuBeav => "Tu Beav",
            ErevRoshHashana => "Erev Rosh Hashana",
            RoshHashana => "Rosh Hashana",
            FastOfGedalyah => "Fast of Gedalyah",
            ErevYomKippur => "Erev Yom Kippur",
            YomKippur => "Yom Kippur",
            ErevSuccos => "Erev Succos",
            Succos => "Succos",
            CholHamoedSuccos => "Chol Hamoed Succos",
            HoshanaRabba => "Hoshana Rabba",
            SheminiAtzeres => "Shemini Atzeres",
            SimchasTorah => "Simchas Torah",
            Chanukah => "Chanukah",
            TenthOfTeves => "Tenth of Teves",
            TuBeshvat => "Tu Beshvat",
            PurimKatan => "Purim Katan",
            ShushanPurimKatan => "Shushan Purim Katan",
            FastOfEsther => "Fast of Esther",
            Purim => "Purim",
            ShushanPurim => "Shushan Purim",
            YomHashoah => "Yom Hashoah",
            YomHazikaron => "Yom Hazikaron",
            YomHaatzmaut => "Yom Haatzmaut",
            YomYerushalayim => "Yom Yerushalayim",
        }
    }
}

/// The observance of `date`, honoring the policy flags. Days with no
/// observance return `None`; overlaps resolve in favor of the more
/// restrictive day (fast days and Yom Tov outrank national days).
pub fn holiday(date: &HebrewDate, policy: CalendarPolicy) -> Option<Holiday> {
    use Holiday::*;
    let day = date.day();
    let dow = date.day_of_week();
    let year = date.year();
    match date.month() {
        JewishMonth::Nissan => {
            if day == 14 {
                Some(ErevPesach)
            } else if day == 15 || day == 21 || (day == 22 && !policy.in_israel) {
                Some(Pesach)
            } else if (16..=20).contains(&day) {
                if day == 16 && !policy.in_israel {
                    Some(Pesach)
                } else {
                    Some(CholHamoedPesach)
                }
            } else if policy.use_modern_holidays
                && ((day == 26 && dow == THURSDAY)
                    || (day == 28 && dow == MONDAY)
                    || (day == 27 && dow != SUNDAY && dow != FRIDAY))
            {
                // Nissan 27, moved off Friday (back to Thursday) and off
                // Sunday (forward to Monday).
                Some(YomHashoah)
            } else {
                None
            }
        }
        JewishMonth::Iyar => {
            if policy.use_modern_holidays
                && ((day == 4 && dow == TUESDAY)
                    || ((day == 3 || day == 2) && dow == WEDNESDAY)
                    || (day == 5 && dow == MONDAY))
            {
                // Iyar 4, pulled earlier when Iyar 5 would put Yom Haatzmaut
                // on Friday or Shabbos, pushed later off Sunday.
                Some(YomHazikaron)
            } else if policy.use_modern_holidays
                && ((day == 5 && dow == WEDNESDAY)
                    || ((day == 4 || day == 3) && dow == THURSDAY)
                    || (day == 6 && dow == TUESDAY))
            {
                Some(YomHaatzmaut)
            } else if day == 14 {
                Some(PesachSheni)
            } else if day == 18 {
                Some(LagBaomer)
            } else if policy.use_modern_holidays && day == 28 {
                Some(YomYerushalayim)
            } else {
                None
            }
        }
        JewishMonth::Sivan => {
            if day == 5 {
                Some(ErevShavuos)
            } else if day == 6 || (day == 7 && !policy.in_israel) {
                Some(Shavuos)
            } else {
                None
            }
        }
        JewishMonth::Tammuz => {
            // Postponed to Sunday when the 17th falls on Shabbos.
            if (day == 17 && dow != SATURDAY) || (day == 18 && dow == SUNDAY) {
                Some(SeventeenOfTammuz)
            } else {
                None
            }
        }
        JewishMonth::Av => {
            if (day == 9 && dow != SATURDAY) || (day == 10 && dow == SUNDAY) {
                Some(TishaBeav)
            } else if day == 15 {
                Some(TuBeav)
            } else {
                None
            }
        }
        JewishMonth::Elul => {
            if day == 29 {
                Some(ErevRoshHashana)
            } else {
                None
            }
        }
        JewishMonth::Tishrei => match day {
            1 | 2 => Some(RoshHashana),
            3 if dow != SATURDAY => Some(FastOfGedalyah),
            4 if dow == SUNDAY => Some(FastOfGedalyah),
            9 => Some(ErevYomKippur),
            10 => Some(YomKippur),
            14 => Some(ErevSuccos),
            15 => Some(Succos),
            16 => Some(if policy.in_israel { CholHamoedSuccos } else { Succos }),
            17..=20 => Some(CholHamoedSuccos),
            21 => Some(HoshanaRabba),
            22 => Some(SheminiAtzeres),
            23 if !policy.in_israel => Some(SimchasTorah),
            _ => None,
        },
        JewishMonth::Cheshvan => None,
        JewishMonth::Kislev => {
            if day >= 25 {
                Some(Chanukah)
            } else {
                None
            }
        }
        JewishMonth::Teves => {
            let last = if is_kislev_short(year) { 3 } else { 2 };
            if day <= last {
                Some(Chanukah)
            } else if day == 10 {
                Some(TenthOfTeves)
            } else {
                None
            }
        }
        JewishMonth::Shevat => {
            if day == 15 {
                Some(TuBeshvat)
            } else {
                None
            }
        }
        JewishMonth::Adar if is_leap_year(year) => match day {
            14 => Some(PurimKatan),
            15 => Some(ShushanPurimKatan),
            _ => None,
        },
        JewishMonth::Adar | JewishMonth::AdarII => {
            // The fast moves back to Thursday the 11th when the 13th falls
            // on Shabbos.
            if (day == 11 && dow == THURSDAY) || (day == 13 && dow != SATURDAY) {
                Some(FastOfEsther)
            } else if day == 14 {
                Some(Purim)
            } else if day == 15 {
                Some(ShushanPurim)
            } else {
                None
            }
        }
    }
}

/// True on full Yom Tov days, when melacha is forbidden.
pub fn is_yom_tov(date: &HebrewDate, policy: CalendarPolicy) -> bool {
    matches!(
        holiday(date, policy),
        Some(
            Holiday::Pesach
                | Holiday::Shavuos
                | Holiday::RoshHashana
                | Holiday::YomKippur
                | Holiday::Succos
                | Holiday::SheminiAtzeres
                | Holiday::SimchasTorah
        )
    )
}

/// True on communal fast days, Yom Kippur included.
pub fn is_taanis(date: &HebrewDate, policy: CalendarPolicy) -> bool {
    matches!(
        holiday(date, policy),
        Some(
            Holiday::SeventeenOfTammuz
                | Holiday::TishaBeav
                | Holiday::FastOfGedalyah
                | Holiday::YomKippur
                | Holiday::TenthOfTeves
                | Holiday::FastOfEsther
        )
    )
}

/// True on the intermediate festival days, Hoshana Rabba included.
pub fn is_chol_hamoed(date: &HebrewDate, policy: CalendarPolicy) -> bool {
    matches!(
        holiday(date, policy),
        Some(Holiday::CholHamoedPesach | Holiday::CholHamoedSuccos | Holiday::HoshanaRabba)
    )
}

/// True on the day before a Yom Tov, including Hoshana Rabba and the last
/// Chol Hamoed day of Pesach.
pub fn is_erev_yom_tov(date: &HebrewDate, policy: CalendarPolicy) -> bool {
    match holiday(date, policy) {
        Some(
            Holiday::ErevPesach
            | Holiday::ErevShavuos
            | Holiday::ErevRoshHashana
            | Holiday::ErevYomKippur
            | Holiday::ErevSuccos
            | Holiday::HoshanaRabba,
        ) => true,
        Some(Holiday::CholHamoedPesach) => date.day() == 20,
        _ => false,
    }
}

/// True on Rosh Chodesh. The first of Tishrei is Rosh Hashana, never
/// Rosh Chodesh.
pub fn is_rosh_chodesh(date: &HebrewDate) -> bool {
    date.day() == 30 || (date.day() == 1 && date.month() != JewishMonth::Tishrei)
}

/// True on the 29th of a month whose next day starts a new month that is
/// marked by Rosh Chodesh. The 29th of Elul is Erev Rosh Hashana instead.
pub fn is_erev_rosh_chodesh(date: &HebrewDate) -> bool {
    date.day() == 29 && date.month() != JewishMonth::Elul
}

/// The day of the Omer count, 1 through 49, for Nissan 16 through Sivan 5.
pub fn day_of_omer(date: &HebrewDate) -> Option<u8> {
    let day = date.day();
    match date.month() {
        JewishMonth::Nissan if day >= 16 => Some(day - 15),
        JewishMonth::Iyar => Some(day + 15),
        JewishMonth::Sivan if day <= 5 => Some(day + 44),
        _ => None,
    }
}

/// The day of Chanukah, 1 through 8, spanning Kislev 25 into Teves.
pub fn day_of_chanukah(date: &HebrewDate) -> Option<u8> {
    let day = date.day();
    match date.month() {
        JewishMonth::Kislev if day >= 25 => Some(day - 24),
        JewishMonth::Teves => {
            if is_kislev_short(date.year()) {
                if day <= 3 { Some(day + 5) } else { None }
            } else if day <= 2 {
                Some(day + 6)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIASPORA: CalendarPolicy = CalendarPolicy {
        in_israel: false,
        use_modern_holidays: false,
    };
    const ISRAEL: CalendarPolicy = CalendarPolicy {
        in_israel: true,
        use_modern_holidays: false,
    };
    const MODERN: CalendarPolicy = CalendarPolicy {
        in_israel: true,
        use_modern_holidays: true,
    };

    fn on(year: i32, month: JewishMonth, day: u8) -> HebrewDate {
        HebrewDate::from_hebrew(year, month, day).unwrap()
    }

    #[test]
    fn pesach_schedule_differs_by_region() {
        let second_day = on(5784, JewishMonth::Nissan, 16);
        assert_eq!(holiday(&second_day, DIASPORA), Some(Holiday::Pesach));
        assert_eq!(holiday(&second_day, ISRAEL), Some(Holiday::CholHamoedPesach));
        let eighth = on(5784, JewishMonth::Nissan, 22);
        assert_eq!(holiday(&eighth, DIASPORA), Some(Holiday::Pesach));
        assert_eq!(holiday(&eighth, ISRAEL), None);
        assert!(is_yom_tov(&second_day, DIASPORA));
        assert!(!is_yom_tov(&second_day, ISRAEL));
        assert!(is_chol_hamoed(&second_day, ISRAEL));
    }

    #[test]
    fn fasts_postpone_off_shabbos() {
        // In 5782 Tammuz 17 fell on Shabbos; the fast was Sunday the 18th.
        let on_shabbos = on(5782, JewishMonth::Tammuz, 17);
        assert_eq!(on_shabbos.day_of_week(), SATURDAY);
        assert_eq!(holiday(&on_shabbos, DIASPORA), None);
        let observed = on(5782, JewishMonth::Tammuz, 18);
        assert_eq!(holiday(&observed, DIASPORA), Some(Holiday::SeventeenOfTammuz));
        assert!(is_taanis(&observed, DIASPORA));
        // Av 9 of 5782 was also Shabbos.
        assert_eq!(holiday(&on(5782, JewishMonth::Av, 9), DIASPORA), None);
        assert_eq!(
            holiday(&on(5782, JewishMonth::Av, 10), DIASPORA),
            Some(Holiday::TishaBeav)
        );
    }

    #[test]
    fn fast_of_esther_moves_to_thursday() {
        // 5784: Adar II 13 fell on Shabbos, fast observed Thursday the 11th.
        let thursday = on(5784, JewishMonth::AdarII, 11);
        assert_eq!(thursday.day_of_week(), THURSDAY);
        assert_eq!(holiday(&thursday, DIASPORA), Some(Holiday::FastOfEsther));
        assert_eq!(holiday(&on(5784, JewishMonth::AdarII, 13), DIASPORA), None);
        assert_eq!(
            holiday(&on(5784, JewishMonth::AdarII, 14), DIASPORA),
            Some(Holiday::Purim)
        );
    }

    #[test]
    fn purim_katan_only_in_leap_years() {
        assert_eq!(
            holiday(&on(5784, JewishMonth::Adar, 14), DIASPORA),
            Some(Holiday::PurimKatan)
        );
        assert_eq!(
            holiday(&on(5783, JewishMonth::Adar, 14), DIASPORA),
            Some(Holiday::Purim)
        );
    }

    #[test]
    fn modern_holidays_are_gated_and_shifted() {
        // 5784: Nissan 27 fell on Sunday, Yom Hashoah observed Monday the 28th.
        assert_eq!(on(5784, JewishMonth::Nissan, 27).day_of_week(), SUNDAY);
        assert_eq!(holiday(&on(5784, JewishMonth::Nissan, 27), MODERN), None);
        assert_eq!(
            holiday(&on(5784, JewishMonth::Nissan, 28), MODERN),
            Some(Holiday::YomHashoah)
        );
        assert_eq!(holiday(&on(5784, JewishMonth::Nissan, 28), ISRAEL), None);
        // 5783: Iyar 5 fell on Wednesday, no shifts needed.
        assert_eq!(
            holiday(&on(5783, JewishMonth::Iyar, 4), MODERN),
            Some(Holiday::YomHazikaron)
        );
        assert_eq!(
            holiday(&on(5783, JewishMonth::Iyar, 5), MODERN),
            Some(Holiday::YomHaatzmaut)
        );
        // 5784: Iyar 5 fell on Monday, both days push forward off Sunday.
        assert_eq!(on(5784, JewishMonth::Iyar, 5).day_of_week(), MONDAY);
        assert_eq!(
            holiday(&on(5784, JewishMonth::Iyar, 5), MODERN),
            Some(Holiday::YomHazikaron)
        );
        assert_eq!(
            holiday(&on(5784, JewishMonth::Iyar, 6), MODERN),
            Some(Holiday::YomHaatzmaut)
        );
        assert_eq!(
            holiday(&on(5784, JewishMonth::Iyar, 28), MODERN),
            Some(Holiday::YomYerushalayim)
        );
    }

    #[test]
    fn omer_span() {
        assert_eq!(day_of_omer(&on(5776, JewishMonth::Nissan, 16)), Some(1));
        assert_eq!(day_of_omer(&on(5776, JewishMonth::Iyar, 18)), Some(33));
        assert_eq!(day_of_omer(&on(5776, JewishMonth::Sivan, 5)), Some(49));
        assert_eq!(day_of_omer(&on(5776, JewishMonth::Sivan, 6)), None);
        assert_eq!(day_of_omer(&on(5776, JewishMonth::Nissan, 15)), None);
    }

    #[test]
    fn chanukah_span_depends_on_kislev() {
        // 5777 is a 353-day year: Kislev has 29 days, Chanukah ends Teves 3.
        assert_eq!(day_of_chanukah(&on(5777, JewishMonth::Kislev, 25)), Some(1));
        assert_eq!(day_of_chanukah(&on(5777, JewishMonth::Teves, 3)), Some(8));
        assert_eq!(day_of_chanukah(&on(5777, JewishMonth::Teves, 4)), None);
        // 5780 has a full Kislev, Chanukah ends Teves 2.
        assert_eq!(day_of_chanukah(&on(5780, JewishMonth::Kislev, 30)), Some(6));
        assert_eq!(day_of_chanukah(&on(5780, JewishMonth::Teves, 2)), Some(8));
        assert_eq!(day_of_chanukah(&on(5780, JewishMonth::Teves, 3)), None);
        assert_eq!(
            holiday(&on(5780, JewishMonth::Kislev, 25), DIASPORA),
            Some(Holiday::Chanukah)
        );
    }

    #[test]
    fn rosh_chodesh_flags() {
        // 5785 is shelaimim, so Cheshvan runs to 30 days.
        assert!(is_rosh_chodesh(&on(5785, JewishMonth::Cheshvan, 30)));
        assert!(is_rosh_chodesh(&on(5785, JewishMonth::Kislev, 1)));
        assert!(!is_rosh_chodesh(&on(5785, JewishMonth::Tishrei, 1)));
        assert!(is_erev_rosh_chodesh(&on(5785, JewishMonth::Cheshvan, 29)));
        assert!(!is_erev_rosh_chodesh(&on(5785, JewishMonth::Elul, 29)));
    }
}
