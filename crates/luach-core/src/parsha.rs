//! Weekly Torah reading and the special Shabbosos.
//!
//! The weekly portion is a pure table lookup: the shape of a Hebrew year,
//! `(leap, day of week of Rosh Hashana, Cheshvan/Kislev pattern)`, admits
//! fourteen combinations, and the Israeli schedule diverges from the
//! diaspora one only when Pesach falls on Thursday or Shabbos. That yields
//! eighteen distinct reading schedules, stored below as rows of one entry
//! per Shabbos of the year.

use serde::{Deserialize, Serialize};

use crate::hebrew_date::{HebrewDate, JewishMonth, SATURDAY};
use crate::year::{YearLengthPattern, days_elapsed, is_leap_year};

/// A weekly Torah portion, single or combined. `None` marks Shabbosos that
/// carry a festival reading instead, and every day that is not Shabbos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parsha {
    None,
    Bereshis,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldos,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemos,
    Vaera,
    Bo,
    Beshalach,
    Yisro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiSisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMos,
    Kedoshim,
    Emor,
    Behar,
    Bechukosai,
    Bamidbar,
    Nasso,
    Behaaloscha,
    Shlach,
    Korach,
    Chukas,
    Balak,
    Pinchas,
    Matos,
    Masei,
    Devarim,
    Vaeschanan,
    Eikev,
    Reeh,
    Shoftim,
    KiSeitzei,
    KiSavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    VzosHaberacha,
    VayakhelPekudei,
    TazriaMetzora,
    AchreiMosKedoshim,
    BeharBechukosai,
    ChukasBalak,
    MatosMasei,
    NitzavimVayeilech,
}

impl Parsha {
    /// Transliterated name; combined portions join with a hyphen.
    pub fn name(self) -> &'static str {
        use Parsha::*;
        match self {
            None => "",
            Bereshis => "Bereshis",
            Noach => "Noach",
            LechLecha => "Lech Lecha",
            Vayera => "Vayera",
            ChayeiSara => "Chayei Sara",
            Toldos => "Toldos",
            Vayetzei => "Vayetzei",
            Vayishlach => "Vayishlach",
            Vayeshev => "Vayeshev",
            Miketz => "Miketz",
            Vayigash => "Vayigash",
            Vayechi => "Vayechi",
            Shemos => "Shemos",
            Vaera => "Vaera",
            Bo => "Bo",
            Beshalach => "Beshalach",
            Yisro => "Yisro",
            Mishpatim => "Mishpatim",
            Terumah => "Terumah",
            Tetzaveh => "Tetzaveh",
            KiSisa => "Ki Sisa",
            Vayakhel => "Vayakhel",
            Pekudei => "Pekudei",
            Vayikra => "Vayikra",
            Tzav => "Tzav",
            Shmini => "Shmini",
            Tazria => "Tazria",
            Metzora => "Metzora",
            AchreiMos => "Achrei Mos",
            Kedoshim => "Kedoshim",
            Emor => "Emor",
            Behar => "Behar",
            Bechukosai => "Bechukosai",
            Bamidbar => "Bamidbar",
            Nasso => "Nasso",
            Behaaloscha => "Behaaloscha",
            Shlach => "Shlach",
            Korach => "Korach",
            Chukas => "Chukas",
            Balak => "Balak",
            Pinchas => "Pinchas",
            Matos => "Matos",
            Masei => "Masei",
            Devarim => "Devarim",
            Vaeschanan => "Vaeschanan",
            Eikev => "Eikev",
            Reeh => "Reeh",
            Shoftim => "Shoftim",
            KiSeitzei => "Ki Seitzei",
            KiSavo => "Ki Savo",
            Nitzavim => "Nitzavim",
            Vayeilech => "Vayeilech",
            Haazinu => "Haazinu",
            VzosHaberacha => "Vzos Haberacha",
            VayakhelPekudei => "Vayakhel-Pekudei",
            TazriaMetzora => "Tazria-Metzora",
            AchreiMosKedoshim => "Achrei Mos-Kedoshim",
            BeharBechukosai => "Behar-Bechukosai",
            ChukasBalak => "Chukas-Balak",
            MatosMasei => "Matos-Masei",
            NitzavimVayeilech => "Nitzavim-Vayeilech",
        }
    }
}

/// The four special Shabbosos of the late winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialShabbos {
    Shkalim,
    Zachor,
    Para,
    Hachodesh,
}

impl SpecialShabbos {
    pub fn name(self) -> &'static str {
        match self {
            SpecialShabbos::Shkalim => "Shabbos Shkalim",
            SpecialShabbos::Zachor => "Shabbos Zachor",
            SpecialShabbos::Para => "Shabbos Para",
            SpecialShabbos::Hachodesh => "Shabbos Hachodesh",
        }
    }
}

/// Index into [`WEEKLY_READINGS`] for the year's schedule, 0..=17.
///
/// Rows 0..=13 cover the fourteen diaspora year shapes; rows 14..=17 are the
/// Israeli schedules that differ from their diaspora counterparts. Several
/// Israeli schedules coincide with an existing row and alias it. Returns
/// `None` only for year shapes the dechiyos rule out.
pub fn parsha_year_type(year: i32, in_israel: bool) -> Option<usize> {
    let leap = is_leap_year(year);
    let rosh = days_elapsed(year).rem_euclid(7);
    let pattern = YearLengthPattern::of(year);
    use YearLengthPattern::*;
    let diaspora = match (leap, rosh, pattern) {
        (false, 1, Chaserim) => 0,
        (false, 1, Shelaimim) => 1,
        (false, 2, Kesidran) => 2,
        (false, 4, Kesidran) => 3,
        (false, 4, Shelaimim) => 4,
        (false, 6, Chaserim) => 5,
        (false, 6, Shelaimim) => 6,
        (true, 1, Chaserim) => 7,
        (true, 1, Shelaimim) => 8,
        (true, 2, Kesidran) => 9,
        (true, 4, Chaserim) => 10,
        (true, 4, Shelaimim) => 11,
        (true, 6, Chaserim) => 12,
        (true, 6, Shelaimim) => 13,
        _ => return Option::None,
    };
    if !in_israel {
        return Some(diaspora);
    }
    // Israel reads its own schedule only when Pesach falls on Thursday or
    // Shabbos; the remaining shapes share the diaspora row.
    Some(match (leap, rosh, pattern) {
        (false, 1, Shelaimim) | (false, 2, Kesidran) => 0,
        (false, 4, Kesidran) => 14,
        (true, 1, Chaserim) => 15,
        (true, 1, Shelaimim) | (true, 2, Kesidran) => 16,
        (true, 6, Shelaimim) => 17,
        _ => diaspora,
    })
}

/// The portion read on the Shabbos of `date`'s week, or [`Parsha::None`] on
/// any other day of the week and on festival Shabbosos.
pub fn parsha_of_week(date: &HebrewDate, in_israel: bool) -> Parsha {
    if date.day_of_week() != SATURDAY {
        return Parsha::None;
    }
    let year = date.year();
    let week = (days_elapsed(year).rem_euclid(7) + date.days_since_start_of_year()) / 7;
    match parsha_year_type(year, in_israel) {
        Some(row) => WEEKLY_READINGS[row][week as usize],
        Option::None => Parsha::None,
    }
}

/// The special maftir carried by this Shabbos, if any. The windows track the
/// month of Purim: in leap years everything shifts into Adar I / Adar II.
pub fn special_shabbos(date: &HebrewDate) -> Option<SpecialShabbos> {
    if date.day_of_week() != SATURDAY {
        return None;
    }
    let leap = is_leap_year(date.year());
    let day = date.day();
    let month = date.month();
    let before_purim_month = if leap { JewishMonth::Adar } else { JewishMonth::Shevat };
    let purim_month = if leap { JewishMonth::AdarII } else { JewishMonth::Adar };
    if (month == before_purim_month && matches!(day, 25 | 27 | 29))
        || (month == purim_month && day == 1)
    {
        Some(SpecialShabbos::Shkalim)
    } else if month == purim_month && matches!(day, 8 | 9 | 11 | 13) {
        Some(SpecialShabbos::Zachor)
    } else if month == purim_month && matches!(day, 18 | 20 | 22 | 23) {
        Some(SpecialShabbos::Para)
    } else if (month == purim_month && matches!(day, 25 | 27 | 29))
        || (month == JewishMonth::Nissan && day == 1)
    {
        Some(SpecialShabbos::Hachodesh)
    } else {
        None
    }
}

/// One row per year type, one column per Shabbos counted from before
/// Rosh Hashana. Unused trailing columns stay `None`.
static WEEKLY_READINGS: [[Parsha; 56]; 18] = {
    use Parsha::*;
    [
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, Shmini,
            TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
            Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
            Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech, None, None, None, None, None,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, Shmini,
            TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, None, Nasso,
            Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev,
            Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech, None, None, None, None, None,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, Shmini,
            TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, None, Nasso,
            Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev,
            Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech, None, None, None, None, None,
        ],
        [
            None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, None,
            Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim, None, None, None, None,
        ],
        [
            None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, None,
            Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim, None, None, None, None,
        ],
        [
            None, None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, Shmini,
            TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
            Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
            Shoftim, KiSeitzei, KiSavo, Nitzavim, None, None, None, None,
        ],
        [
            None, None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, Shmini,
            TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
            Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
            Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech, None, None, None, None,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, None,
            Nasso, Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech, None,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar,
            Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim,
            Vaeschanan, Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar,
            Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim,
            Vaeschanan, Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim,
        ],
        [
            None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, AchreiMos, None, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim,
        ],
        [
            None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, AchreiMos, None, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech,
        ],
        [
            None, None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech,
        ],
        [
            None, None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, None,
            Nasso, Behaaloscha, Shlach, Korach, ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech,
        ],
        [
            None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None, Shmini,
            TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai, Bamidbar, Nasso, Behaaloscha,
            Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan, Eikev, Reeh,
            Shoftim, KiSeitzei, KiSavo, Nitzavim, None, None, None, None,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech, None,
        ],
        [
            None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim,
        ],
        [
            None, None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera, ChayeiSara, Toldos,
            Vayetzei, Vayishlach, Vayeshev, Miketz, Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach,
            Yisro, Mishpatim, Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, Shmini,
            Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar, Bechukosai, Bamidbar, Nasso,
            Behaaloscha, Shlach, Korach, Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan,
            Eikev, Reeh, Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech,
        ],
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_year_shape_has_a_row() {
        for year in 5600..5900 {
            assert!(parsha_year_type(year, false).is_some(), "year {year}");
            assert!(parsha_year_type(year, true).is_some(), "year {year}");
        }
    }

    #[test]
    fn israel_diverges_only_when_pesach_is_thursday_or_shabbos() {
        use crate::year::Kviah;
        for year in 5600..5900 {
            let differs = parsha_year_type(year, false) != parsha_year_type(year, true);
            let pesach = Kviah::of(year).pesach_day_of_week;
            assert_eq!(differs, pesach == 5 || pesach == 7, "year {year}");
        }
    }

    #[test]
    fn non_shabbos_days_have_no_portion() {
        let sunday = HebrewDate::from_hebrew(5784, JewishMonth::Cheshvan, 4).unwrap();
        assert_ne!(sunday.day_of_week(), SATURDAY);
        assert_eq!(parsha_of_week(&sunday, false), Parsha::None);
    }

    #[test]
    fn every_shabbos_row_reads_the_annual_cycle() {
        // Each schedule reads Bereshis through Haazinu exactly once, whether
        // alone or inside a combined portion. Vayeilech is the one exception:
        // a year can open with it on Shabbos Shuva and close with
        // Nitzavim-Vayeilech before the next Rosh Hashana, or skip it
        // entirely, so it appears zero, one or two times.
        use Parsha::*;
        let components = |p: Parsha| -> Vec<Parsha> {
            match p {
                VayakhelPekudei => vec![Vayakhel, Pekudei],
                TazriaMetzora => vec![Tazria, Metzora],
                AchreiMosKedoshim => vec![AchreiMos, Kedoshim],
                BeharBechukosai => vec![Behar, Bechukosai],
                ChukasBalak => vec![Chukas, Balak],
                MatosMasei => vec![Matos, Masei],
                NitzavimVayeilech => vec![Nitzavim, Vayeilech],
                None => vec![],
                single => vec![single],
            }
        };
        for (row, schedule) in WEEKLY_READINGS.iter().enumerate() {
            let mut seen: Vec<Parsha> = Vec::new();
            for &entry in schedule {
                seen.extend(components(entry));
            }
            for &part in &seen {
                let count = seen.iter().filter(|&&p| p == part).count();
                if part == Vayeilech {
                    assert!(count <= 2, "row {row} reads Vayeilech {count} times");
                } else {
                    assert_eq!(count, 1, "row {row} repeats {part:?}");
                }
            }
            assert!(seen.len() >= 52, "row {row} reads only {} portions", seen.len());
            assert!(seen.contains(&Bereshis) && seen.contains(&Haazinu), "row {row}");
        }
        // At least one shape straddles: Vayeilech on Shabbos Shuva and again
        // inside Nitzavim-Vayeilech at the tail.
        assert!(WEEKLY_READINGS.iter().any(|schedule| {
            schedule
                .iter()
                .filter(|&&p| matches!(p, Vayeilech | NitzavimVayeilech))
                .count()
                == 2
        }));
    }

    #[test]
    fn special_shabbosos_appear_once_per_year() {
        for year in [5783, 5784, 5785] {
            let mut counts = [0u32; 4];
            let mut date = HebrewDate::from_hebrew(year, JewishMonth::Tishrei, 1).unwrap();
            while date.year() == year {
                if let Some(s) = special_shabbos(&date) {
                    counts[s as usize] += 1;
                }
                date.forward();
            }
            assert_eq!(counts, [1, 1, 1, 1], "year {year}");
        }
    }
}
