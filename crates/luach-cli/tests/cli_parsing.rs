use clap::Parser;
use luach_cli::cli_args::{Cli, Command, DateSpec, parse_date_spec};
use luach_core::config::{
    FileConfig, OutputFormat, RuntimeOverrides, apply_runtime_overrides,
};
use luach_core::hebrew_date::JewishMonth;

// Integration tests for CLI parsing and the runtime override flow: flags
// turn into overrides, overrides land on top of the file configuration.

#[test]
fn test_runtime_overrides_empty() {
    let overrides = RuntimeOverrides::default();
    assert!(
        overrides.is_empty(),
        "Default RuntimeOverrides should be empty"
    );
}

#[test]
fn test_no_flags_leave_config_untouched() {
    let cli = Cli::parse_from(["luach", "today"]);
    let overrides = cli.global.to_runtime_overrides();
    assert!(overrides.is_empty());

    let mut config = FileConfig::default();
    apply_runtime_overrides(&mut config, &overrides);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(!config.calendar.in_israel);
}

#[test]
fn test_israel_flag_overrides_config() {
    let cli = Cli::parse_from(["luach", "holidays", "5784", "--israel"]);
    let mut config = FileConfig::default();
    apply_runtime_overrides(&mut config, &cli.global.to_runtime_overrides());
    assert!(config.calendar.in_israel);
    assert!(!config.calendar.use_modern_holidays);
}

#[test]
fn test_israel_flag_can_disable_config_value() {
    let cli = Cli::parse_from(["luach", "today", "--israel", "false", "--modern"]);
    let mut config = FileConfig::default();
    config.calendar.in_israel = true;
    apply_runtime_overrides(&mut config, &cli.global.to_runtime_overrides());
    assert!(!config.calendar.in_israel);
    assert!(config.calendar.use_modern_holidays);
}

#[test]
fn test_subcommand_parsing() {
    let cli = Cli::parse_from(["luach", "convert", "5784-Nissan-15"]);
    match cli.command {
        Some(Command::Convert(args)) => assert_eq!(args.date, "5784-Nissan-15"),
        other => panic!("expected convert, got {other:?}"),
    }

    let cli = Cli::parse_from(["luach", "molad", "5784", "Tishrei", "--json"]);
    match cli.command {
        Some(Command::Molad(args)) => {
            assert_eq!(args.year, 5784);
            assert_eq!(args.month, "Tishrei");
        }
        other => panic!("expected molad, got {other:?}"),
    }
    assert!(cli.global.json);

    let cli = Cli::parse_from(["luach", "parsha"]);
    match cli.command {
        Some(Command::Parsha(args)) => assert!(args.date.is_none()),
        other => panic!("expected parsha, got {other:?}"),
    }
}

#[test]
fn test_date_specs_cover_both_calendars() {
    assert_eq!(
        parse_date_spec("2024-12-31").unwrap(),
        DateSpec::Gregorian {
            year: 2024,
            month: 12,
            day: 31
        }
    );
    assert_eq!(
        parse_date_spec("5785-cheshvan-9").unwrap(),
        DateSpec::Hebrew {
            year: 5785,
            month: JewishMonth::Cheshvan,
            day: 9
        }
    );
    let err = parse_date_spec("next tuesday").unwrap_err();
    assert!(err.contains("Unrecognized date"), "{err}");
}
