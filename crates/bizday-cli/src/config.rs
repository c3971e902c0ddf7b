//! CLI settings file.
//!
//! Settings are stored as a flat JSON object under
//! `<config_dir>/bizday/config.json`. Missing keys fall back to their
//! defaults; the file is only created by `config set`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bizday_core::{CountryCode, Iso3166Countries};
use serde::{Deserialize, Serialize};

use crate::cli::{DateStyle, OutputFormat};
use crate::error::{CliError, CliResult};

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Country used when `--country` is not given
    DefaultCountry,
    /// Default output format
    DefaultFormat,
    /// How `add` writes its result
    DateStyle,
    /// Log filter when `RUST_LOG` is unset
    LogLevel,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Looks a key up by name or short alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_country" | "country" => Some(Self::DefaultCountry),
            "default_format" | "format" => Some(Self::DefaultFormat),
            "date_style" | "style" => Some(Self::DateStyle),
            "log_level" | "log" => Some(Self::LogLevel),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DefaultCountry => "default_country",
            Self::DefaultFormat => "default_format",
            Self::DateStyle => "date_style",
            Self::LogLevel => "log_level",
            Self::UseColors => "use_colors",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DefaultCountry => "Default ISO-3166 alpha-2 country code",
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DateStyle => "Result date style for add (iso, long)",
            Self::LogLevel => "Log level when RUST_LOG is unset (error, warn, info, debug, trace)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::DefaultCountry => "US",
            Self::DefaultFormat => "table",
            Self::DateStyle => "iso",
            Self::LogLevel => "warn",
            Self::UseColors => "true",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultCountry,
            Self::DefaultFormat,
            Self::DateStyle,
            Self::LogLevel,
            Self::UseColors,
        ]
    }

    /// Checks `value` and returns the form that is stored.
    pub fn validate(self, value: &str) -> CliResult<String> {
        let lower = value.trim().to_lowercase();
        match self {
            Self::DefaultCountry => CountryCode::try_new(value, &Iso3166Countries)
                .map(|code| code.as_str().to_string())
                .map_err(|e| CliError::Config(e.to_string())),
            Self::DefaultFormat => OutputFormat::from_name(&lower)
                .map(|_| lower)
                .ok_or_else(|| {
                    CliError::Config(format!(
                        "Invalid format: {value}. Use table, json, csv, or minimal."
                    ))
                }),
            Self::DateStyle => DateStyle::from_name(&lower).map(|_| lower).ok_or_else(|| {
                CliError::Config(format!("Invalid date style: {value}. Use iso or long."))
            }),
            Self::LogLevel => {
                if ["error", "warn", "info", "debug", "trace", "off"].contains(&lower.as_str()) {
                    Ok(lower)
                } else {
                    Err(CliError::Config(format!(
                        "Invalid log level: {value}. Use error, warn, info, debug, trace, or off."
                    )))
                }
            }
            Self::UseColors => parse_bool(&lower)
                .map(|flag| flag.to_string())
                .ok_or_else(|| {
                    CliError::Config(format!("Invalid boolean: {value}. Use true or false."))
                }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Stored settings.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Config {
    /// Reads the file at `path`, or returns empty settings if it does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let io_err = |source| CliError::ConfigFile {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Returns the stored value of `key`, or its default.
    pub fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    pub fn is_set(&self, key: ConfigKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    pub fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    pub fn default_format(&self) -> OutputFormat {
        OutputFormat::from_name(self.value(ConfigKey::DefaultFormat)).unwrap_or_default()
    }

    pub fn date_style(&self) -> DateStyle {
        DateStyle::from_name(self.value(ConfigKey::DateStyle)).unwrap_or_default()
    }

    pub fn use_colors(&self) -> bool {
        parse_bool(self.value(ConfigKey::UseColors)).unwrap_or(true)
    }
}

/// Default location of the settings file.
pub fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("bizday").join("config.json"))
}
