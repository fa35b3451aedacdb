//! Command-line frontend for the calendar engines.

pub mod cli_args;

use clap::Parser;
use luach_core::config::OutputFormat;
use luach_core::hebrew_date::{HebrewDate, JewishMonth, SATURDAY};
use luach_core::holidays::{
    self, CalendarPolicy, day_of_chanukah, day_of_omer, is_erev_rosh_chodesh, is_rosh_chodesh,
};
use luach_core::logging::{LoggingDestination, init_logging};
use luach_core::parsha::{Parsha, parsha_of_week, special_shabbos};
use luach_core::year::Kviah;
use luach_core::{apply_runtime_overrides, load_config, molad};
use serde_json::json;

use cli_args::{Cli, Command, DateSpec, parse_date_spec, parse_jewish_month};

/// Parse the process arguments and run the selected command.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    if let Err(err) = init_logging(LoggingDestination::FileAndStderr) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    let load = load_config();
    for warning in &load.warnings {
        eprintln!("Warning: {warning}");
    }
    let mut config = load.config;
    apply_runtime_overrides(&mut config, &cli.global.to_runtime_overrides());
    let policy = config.policy();
    let format = config.output.format;
    tracing::debug!(?policy, ?format, "resolved runtime settings");

    match cli.command.unwrap_or(Command::Today) {
        Command::Convert(args) => {
            let date = resolve_date(&args.date)?;
            print_day(&date, policy, format)
        }
        Command::Today => print_day(&today()?, policy, format),
        Command::Holidays(args) => print_holidays(args.year, policy, format),
        Command::Parsha(args) => {
            let date = match args.date {
                Some(ref spec) => resolve_date(spec)?,
                None => today()?,
            };
            print_parsha(&date, policy, format)
        }
        Command::Molad(args) => {
            let month = parse_jewish_month(&args.month)?;
            print_molad(args.year, month, format)
        }
    }
}

fn resolve_date(input: &str) -> Result<HebrewDate, String> {
    let date = match parse_date_spec(input)? {
        DateSpec::Gregorian { year, month, day } => HebrewDate::from_gregorian(year, month, day),
        DateSpec::Hebrew { year, month, day } => HebrewDate::from_hebrew(year, month, day),
    };
    date.map_err(|err| err.to_string())
}

fn today() -> Result<HebrewDate, String> {
    use chrono::Datelike;
    let now = chrono::Local::now().date_naive();
    HebrewDate::from_gregorian(now.year(), now.month() as u8, now.day() as u8)
        .map_err(|err| err.to_string())
}

/// The Shabbos of this date's week (the date itself when it is Shabbos).
fn week_shabbos(date: &HebrewDate) -> HebrewDate {
    let mut shabbos = *date;
    while shabbos.day_of_week() != SATURDAY {
        shabbos.forward();
    }
    shabbos
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Shabbos",
];

fn weekday_name(date: &HebrewDate) -> &'static str {
    WEEKDAY_NAMES[(date.day_of_week() - 1) as usize]
}

fn format_gregorian(date: &HebrewDate) -> String {
    let (year, month, day) = date.gregorian();
    format!("{year:04}-{month:02}-{day:02}")
}

fn format_hebrew(date: &HebrewDate) -> String {
    format!("{} {} {}", date.day(), date.month().name(), date.year())
}

fn print_day(date: &HebrewDate, policy: CalendarPolicy, format: OutputFormat) -> Result<(), String> {
    let holiday = holidays::holiday(date, policy);
    let shabbos = week_shabbos(date);
    let parsha = parsha_of_week(&shabbos, policy.in_israel);
    let special = special_shabbos(&shabbos);
    let kviah = Kviah::of(date.year());

    match format {
        OutputFormat::Json => {
            let value = json!({
                "gregorian": format_gregorian(date),
                "hebrew": {
                    "year": date.year(),
                    "month": date.month(),
                    "day": date.day(),
                },
                "kviah": kviah,
                "day_of_week": weekday_name(date),
                "holiday": holiday,
                "omer": day_of_omer(date),
                "chanukah": day_of_chanukah(date),
                "rosh_chodesh": is_rosh_chodesh(date),
                "erev_rosh_chodesh": is_erev_rosh_chodesh(date),
                "parsha": (parsha != Parsha::None).then(|| parsha),
                "special_shabbos": special,
                "birkas_hachamah": date.is_birkas_hachamah(),
            });
            println!("{}", serde_json::to_string_pretty(&value).map_err(|err| err.to_string())?);
        }
        OutputFormat::Text => {
            println!("Gregorian:  {} ({})", format_gregorian(date), weekday_name(date));
            println!("Hebrew:     {}", format_hebrew(date));
            println!(
                "Year:       {} of {} days ({:?})",
                if date.is_leap_year() { "leap" } else { "common" },
                date.year_length(),
                kviah.pattern
            );
            if let Some(holiday) = holiday {
                println!("Holiday:    {}", holiday.name());
            }
            if let Some(omer) = day_of_omer(date) {
                println!("Omer:       day {omer}");
            }
            if let Some(candle) = day_of_chanukah(date) {
                println!("Chanukah:   day {candle}");
            }
            if is_rosh_chodesh(date) {
                println!("Rosh Chodesh {}", date.month().name());
            }
            if parsha != Parsha::None {
                println!("Parsha:     {}", parsha.name());
            }
            if let Some(special) = special {
                println!("Special:    {}", special.name());
            }
            if date.is_birkas_hachamah() {
                println!("Birkas Hachamah is recited this morning");
            }
        }
    }
    Ok(())
}

fn print_holidays(year: i32, policy: CalendarPolicy, format: OutputFormat) -> Result<(), String> {
    let mut date =
        HebrewDate::from_hebrew(year, JewishMonth::Tishrei, 1).map_err(|err| err.to_string())?;
    let mut entries = Vec::new();
    while date.year() == year {
        if let Some(holiday) = holidays::holiday(&date, policy) {
            entries.push((date, holiday));
        }
        date.forward();
    }

    match format {
        OutputFormat::Json => {
            let values: Vec<_> = entries
                .iter()
                .map(|(date, holiday)| {
                    json!({
                        "gregorian": format_gregorian(date),
                        "hebrew": format_hebrew(date),
                        "holiday": holiday,
                        "name": holiday.name(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&values).map_err(|err| err.to_string())?);
        }
        OutputFormat::Text => {
            for (date, holiday) in &entries {
                println!(
                    "{}  {:>18}  {}",
                    format_gregorian(date),
                    format_hebrew(date),
                    holiday.name()
                );
            }
        }
    }
    Ok(())
}

fn print_parsha(date: &HebrewDate, policy: CalendarPolicy, format: OutputFormat) -> Result<(), String> {
    let shabbos = week_shabbos(date);
    let parsha = parsha_of_week(&shabbos, policy.in_israel);
    let special = special_shabbos(&shabbos);

    match format {
        OutputFormat::Json => {
            let value = json!({
                "shabbos_gregorian": format_gregorian(&shabbos),
                "shabbos_hebrew": format_hebrew(&shabbos),
                "parsha": (parsha != Parsha::None).then(|| parsha),
                "name": (parsha != Parsha::None).then(|| parsha.name()),
                "special_shabbos": special,
            });
            println!("{}", serde_json::to_string_pretty(&value).map_err(|err| err.to_string())?);
        }
        OutputFormat::Text => {
            println!(
                "Shabbos {} ({})",
                format_gregorian(&shabbos),
                format_hebrew(&shabbos)
            );
            if parsha == Parsha::None {
                println!("Parsha:  festival reading");
            } else {
                println!("Parsha:  {}", parsha.name());
            }
            if let Some(special) = special {
                println!("Special: {}", special.name());
            }
        }
    }
    Ok(())
}

fn print_molad(year: i32, month: JewishMonth, format: OutputFormat) -> Result<(), String> {
    let molad = molad(year, month);
    let date = molad.date();

    match format {
        OutputFormat::Json => {
            let value = json!({
                "year": year,
                "month": month,
                "gregorian": date.as_ref().map(format_gregorian),
                "day_of_week": date.as_ref().map(weekday_name),
                "hours": molad.hours(),
                "minutes": molad.minutes(),
                "chalakim": molad.chalakim_past_minute(),
            });
            println!("{}", serde_json::to_string_pretty(&value).map_err(|err| err.to_string())?);
        }
        OutputFormat::Text => {
            let when = match date {
                Some(ref date) => format!("{}, {}", weekday_name(date), format_gregorian(date)),
                None => "out of supported range".to_string(),
            };
            println!(
                "Molad of {} {}: {}, {} hours {} minutes and {} chalakim from nightfall",
                month.name(),
                year,
                when,
                molad.hours(),
                molad.minutes(),
                molad.chalakim_past_minute()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_shabbos_lands_on_shabbos() {
        let date = HebrewDate::from_gregorian(2024, 4, 23).unwrap();
        let shabbos = week_shabbos(&date);
        assert_eq!(shabbos.day_of_week(), SATURDAY);
        assert!(shabbos.abs_day() - date.abs_day() < 7);
        assert_eq!(week_shabbos(&shabbos), shabbos);
    }

    #[test]
    fn gregorian_formatting_pads() {
        let date = HebrewDate::from_gregorian(33, 4, 3).unwrap();
        assert_eq!(format_gregorian(&date), "0033-04-03");
    }
}
