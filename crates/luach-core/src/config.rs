use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::holidays::CalendarPolicy;

const CONFIG_DIR_NAME: &str = "luach";
const CONFIG_FILE_NAME: &str = "config.toml";
const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Result returned by [`load_config`], capturing the source and any non-fatal issues.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: FileConfig,
    pub warnings: Vec<String>,
    pub source: ConfigSource,
}

/// Indicates where the configuration was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No persisted configuration was found or usable; defaults were synthesized.
    Default,
    /// Configuration was read from `config.toml`.
    File,
}

/// Errors that can occur when persisting configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Ser(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {err}"),
            ConfigError::Ser(err) => write!(f, "TOML serialization error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Ser(value)
    }
}

/// Disk-backed configuration schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "FileConfig::schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub calendar: CalendarPreferences,
    #[serde(default)]
    pub output: OutputPreferences,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            calendar: CalendarPreferences::default(),
            output: OutputPreferences::default(),
        }
    }
}

impl FileConfig {
    const fn schema_version() -> u32 {
        CURRENT_SCHEMA_VERSION
    }

    /// The policy flags the calendar engines consume.
    pub fn policy(&self) -> CalendarPolicy {
        CalendarPolicy {
            in_israel: self.calendar.in_israel,
            use_modern_holidays: self.calendar.use_modern_holidays,
        }
    }
}

/// Calendar preferences that map directly to the engine policy flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarPreferences {
    #[serde(default)]
    pub in_israel: bool,
    #[serde(default)]
    pub use_modern_holidays: bool,
}

/// Presentation preferences for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPreferences {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering formats the CLI can emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Represents overrides sourced from runtime inputs (CLI flags).
#[derive(Debug, Default, Clone)]
pub struct RuntimeOverrides {
    pub in_israel: Option<bool>,
    pub use_modern_holidays: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl RuntimeOverrides {
    pub fn is_empty(&self) -> bool {
        self.in_israel.is_none() && self.use_modern_holidays.is_none() && self.format.is_none()
    }
}

/// Merge runtime overrides into an existing configuration.
pub fn apply_runtime_overrides(config: &mut FileConfig, overrides: &RuntimeOverrides) {
    if let Some(value) = overrides.in_israel {
        config.calendar.in_israel = value;
    }
    if let Some(value) = overrides.use_modern_holidays {
        config.calendar.use_modern_holidays = value;
    }
    if let Some(value) = overrides.format {
        config.output.format = value;
    }
}

/// Path to the configuration directory.
pub fn config_directory() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to `config.toml`.
pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Load the configuration, falling back to defaults on any failure.
pub fn load_config() -> ConfigLoadResult {
    load_config_from(&config_path())
}

fn load_config_from(path: &PathBuf) -> ConfigLoadResult {
    let mut warnings = Vec::new();

    if path.exists() {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                Ok(cfg) => {
                    let (cfg, mut sanitize_warnings) = sanitize_config(cfg);
                    warnings.append(&mut sanitize_warnings);
                    return ConfigLoadResult {
                        config: cfg,
                        warnings,
                        source: ConfigSource::File,
                    };
                }
                Err(err) => {
                    warnings.push(format!(
                        "Failed to parse {} as TOML: {}. Falling back to defaults.",
                        CONFIG_FILE_NAME, err
                    ));
                }
            },
            Err(err) => {
                warnings.push(format!(
                    "Failed to read {}: {}. Falling back to defaults.",
                    CONFIG_FILE_NAME, err
                ));
            }
        }
    }

    ConfigLoadResult {
        config: FileConfig::default(),
        warnings,
        source: ConfigSource::Default,
    }
}

/// Persist the configuration to disk.
pub fn save_config(config: &FileConfig) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn sanitize_config(mut config: FileConfig) -> (FileConfig, Vec<String>) {
    let mut warnings = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        warnings.push(format!(
            "Unknown config schema version {}. Resetting to {}.",
            config.schema_version, CURRENT_SCHEMA_VERSION
        ));
        config = FileConfig::default();
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_wrong_schema_version_resets() {
        let config = FileConfig {
            schema_version: 999,
            calendar: CalendarPreferences {
                in_israel: true,
                use_modern_holidays: true,
            },
            output: OutputPreferences::default(),
        };

        let (sanitized, warnings) = sanitize_config(config);

        assert_eq!(sanitized.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(!sanitized.calendar.in_israel);
        assert!(
            warnings.iter().any(|w| w.contains("schema version")),
            "Should warn about unknown schema version"
        );
    }

    #[test]
    fn overrides_apply_only_when_present() {
        let mut config = FileConfig::default();
        let overrides = RuntimeOverrides {
            in_israel: Some(true),
            use_modern_holidays: None,
            format: Some(OutputFormat::Json),
        };
        assert!(!overrides.is_empty());

        apply_runtime_overrides(&mut config, &overrides);

        assert!(config.calendar.in_israel);
        assert!(!config.calendar.use_modern_holidays);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn load_config_reads_file_and_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "schema_version = 1\n[calendar]\nin_israel = true\n").unwrap();

        let result = load_config_from(&path);
        assert_eq!(result.source, ConfigSource::File);
        assert!(result.config.calendar.in_israel);
        assert!(!result.config.calendar.use_modern_holidays);
        assert_eq!(result.config.output.format, OutputFormat::Text);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn load_config_bad_toml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not valid toml [").unwrap();

        let result = load_config_from(&path);
        assert_eq!(result.source, ConfigSource::Default);
        assert!(result.warnings.iter().any(|w| w.contains("TOML")));
    }

    #[test]
    fn missing_file_synthesizes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");

        let result = load_config_from(&path);
        assert_eq!(result.source, ConfigSource::Default);
        assert_eq!(result.config.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(result.warnings.is_empty());
    }
}
