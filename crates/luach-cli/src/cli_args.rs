use clap::{ArgAction, Args, Parser, Subcommand};
use luach_core::config::{OutputFormat, RuntimeOverrides};
use luach_core::hebrew_date::JewishMonth;
use regex::Regex;

/// Top-level CLI entrypoint.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Args, Default)]
pub struct GlobalArgs {
    /// Use the Israeli holiday and reading schedule (defaults to config value).
    #[arg(
        long = "israel",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        global = true
    )]
    pub israel: Option<bool>,

    /// Include the modern Israeli national days (defaults to config value).
    #[arg(
        long = "modern",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        global = true
    )]
    pub modern: Option<bool>,

    /// Emit JSON instead of human-readable text.
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Convert CLI flags into runtime overrides.
    pub fn to_runtime_overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides {
            in_israel: self.israel,
            use_modern_holidays: self.modern,
            format: self.json.then_some(OutputFormat::Json),
        }
    }
}

/// Supported subcommands. With no subcommand the CLI reports on today.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a Gregorian or Hebrew date and show its observances.
    Convert(DateArgs),
    /// Report on today's date.
    Today,
    /// List the holidays of a Hebrew year.
    Holidays(YearArgs),
    /// Show the Torah reading for the week of a date.
    Parsha(OptionalDateArgs),
    /// Show the molad of a Hebrew month.
    Molad(MoladArgs),
}

/// A date in either calendar: `2024-04-23` or `5784-Nissan-15`.
#[derive(Debug, Clone, Args)]
pub struct DateArgs {
    #[arg(value_name = "DATE")]
    pub date: String,
}

#[derive(Debug, Clone, Args)]
pub struct OptionalDateArgs {
    /// Defaults to today when omitted.
    #[arg(value_name = "DATE")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct YearArgs {
    /// Hebrew year, e.g. 5784.
    #[arg(value_name = "YEAR")]
    pub year: i32,
}

#[derive(Debug, Clone, Args)]
pub struct MoladArgs {
    /// Hebrew year, e.g. 5784.
    #[arg(value_name = "YEAR")]
    pub year: i32,
    /// Hebrew month name, e.g. Nissan.
    #[arg(value_name = "MONTH")]
    pub month: String,
}

/// A parsed command-line date, before calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    Gregorian { year: i32, month: u8, day: u8 },
    Hebrew { year: i32, month: JewishMonth, day: u8 },
}

const MONTH_NAMES: &[(&str, JewishMonth)] = &[
    ("nissan", JewishMonth::Nissan),
    ("nisan", JewishMonth::Nissan),
    ("iyar", JewishMonth::Iyar),
    ("sivan", JewishMonth::Sivan),
    ("tammuz", JewishMonth::Tammuz),
    ("tamuz", JewishMonth::Tammuz),
    ("av", JewishMonth::Av),
    ("elul", JewishMonth::Elul),
    ("tishrei", JewishMonth::Tishrei),
    ("tishri", JewishMonth::Tishrei),
    ("cheshvan", JewishMonth::Cheshvan),
    ("heshvan", JewishMonth::Cheshvan),
    ("marcheshvan", JewishMonth::Cheshvan),
    ("kislev", JewishMonth::Kislev),
    ("teves", JewishMonth::Teves),
    ("tevet", JewishMonth::Teves),
    ("shevat", JewishMonth::Shevat),
    ("shvat", JewishMonth::Shevat),
    ("adar", JewishMonth::Adar),
    ("adar1", JewishMonth::Adar),
    ("adari", JewishMonth::Adar),
    ("adar2", JewishMonth::AdarII),
    ("adarii", JewishMonth::AdarII),
];

/// Resolve a month name, tolerating common transliteration variants. On
/// failure the error suggests the closest known name.
pub fn parse_jewish_month(name: &str) -> Result<JewishMonth, String> {
    let normalized = name.to_ascii_lowercase().replace([' ', '_'], "");
    if let Some((_, month)) = MONTH_NAMES.iter().find(|(n, _)| *n == normalized) {
        return Ok(*month);
    }
    let suggestion = MONTH_NAMES
        .iter()
        .map(|(n, _)| (n, strsim::jaro_winkler(&normalized, n)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, score)| *score >= 0.8);
    match suggestion {
        Some((best, _)) => Err(format!(
            "Unknown Hebrew month '{name}'. Did you mean '{best}'?"
        )),
        None => Err(format!("Unknown Hebrew month '{name}'.")),
    }
}

/// Parse `YYYY-MM-DD` (Gregorian) or `YYYY-Month-DD` (Hebrew).
pub fn parse_date_spec(input: &str) -> Result<DateSpec, String> {
    // The expressions are static so compilation cannot fail at runtime.
    let gregorian = Regex::new(r"^(-?\d{1,5})-(\d{1,2})-(\d{1,2})$")
        .map_err(|err| err.to_string())?;
    let hebrew = Regex::new(r"^(\d{1,5})-([A-Za-z][A-Za-z0-9]*)-(\d{1,2})$")
        .map_err(|err| err.to_string())?;

    if let Some(caps) = gregorian.captures(input) {
        let year: i32 = caps[1].parse().map_err(|_| bad_date(input))?;
        let month: u8 = caps[2].parse().map_err(|_| bad_date(input))?;
        let day: u8 = caps[3].parse().map_err(|_| bad_date(input))?;
        return Ok(DateSpec::Gregorian { year, month, day });
    }
    if let Some(caps) = hebrew.captures(input) {
        let year: i32 = caps[1].parse().map_err(|_| bad_date(input))?;
        let month = parse_jewish_month(&caps[2])?;
        let day: u8 = caps[3].parse().map_err(|_| bad_date(input))?;
        return Ok(DateSpec::Hebrew { year, month, day });
    }
    Err(bad_date(input))
}

fn bad_date(input: &str) -> String {
    format!(
        "Unrecognized date '{input}'. Expected 2024-04-23 (Gregorian) or 5784-Nissan-15 (Hebrew)."
    )
}
