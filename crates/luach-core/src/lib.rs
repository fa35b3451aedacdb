//! Core library crate exposing the Hebrew calendar engines.

pub mod config;
pub mod hebrew_date;
pub mod holidays;
pub mod logging;
pub mod molad;
pub mod parsha;
pub mod year;

pub use config::{
    CalendarPreferences, ConfigError, ConfigLoadResult, ConfigSource, FileConfig, OutputFormat,
    OutputPreferences, RuntimeOverrides, apply_runtime_overrides, config_directory, config_path,
    load_config, save_config,
};
pub use hebrew_date::{DateError, HebrewDate, JewishMonth};
pub use holidays::{
    CalendarPolicy, Holiday, day_of_chanukah, day_of_omer, holiday, is_chol_hamoed,
    is_erev_rosh_chodesh, is_erev_yom_tov, is_rosh_chodesh, is_taanis, is_yom_tov,
};
pub use logging::{LoggingDestination, LoggingError, current_log_path, init_logging};
pub use molad::{Molad, molad};
pub use parsha::{Parsha, SpecialShabbos, parsha_of_week, parsha_year_type, special_shabbos};
pub use year::{Kviah, YearLengthPattern, is_leap_year, year_length};
