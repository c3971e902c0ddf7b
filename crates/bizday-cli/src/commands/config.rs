//! Config command implementation.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::cli::OutputFormat;
use crate::config::{Config, ConfigKey};
use crate::error::CliError;
use crate::output::{heading, print_record, print_rows, status, Status};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show every setting and where its value comes from
    Show,

    /// Print one setting
    Get {
        /// Setting name or alias
        key: String,
    },

    /// Validate and store a setting
    Set {
        /// Setting name or alias
        key: String,
        /// New value
        value: String,
    },

    /// Describe the available settings
    List,

    /// Drop stored settings so their defaults apply again
    Reset {
        /// Reset every setting
        #[arg(long, conflicts_with = "key", required_unless_present = "key")]
        all: bool,
        /// Setting to reset
        key: Option<String>,
    },

    /// Print the settings file location
    Path,
}

/// Effective value of one setting.
#[derive(Debug, Serialize, Tabled)]
struct Setting {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: &'static str,
}

impl Setting {
    fn of(config: &Config, key: ConfigKey) -> Self {
        Self {
            key: key.as_str(),
            value: config.value(key).to_string(),
            source: if config.is_set(key) { "file" } else { "default" },
        }
    }
}

/// Description of one setting.
#[derive(Debug, Serialize, Tabled)]
struct KeyInfo {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Default")]
    default: &'static str,
}

fn parse_key(raw: &str) -> Result<ConfigKey> {
    ConfigKey::parse(raw)
        .ok_or_else(|| CliError::Config(format!("Unknown configuration key: {raw}")).into())
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let path = &ctx.config_path;
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load(path)?;
            let settings: Vec<_> = ConfigKey::all()
                .iter()
                .map(|&key| Setting::of(&config, key))
                .collect();
            if ctx.format == OutputFormat::Minimal {
                for setting in &settings {
                    println!("{}={}", setting.key, setting.value);
                }
                return Ok(());
            }
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                heading(&format!("Settings ({})", path.display()));
            }
            print_rows(&settings, ctx.format)
        }
        ConfigCommand::Get { key } => {
            let config = Config::load(path)?;
            let setting = Setting::of(&config, parse_key(&key)?);
            match ctx.format {
                OutputFormat::Minimal => println!("{}", setting.value),
                OutputFormat::Table => println!("{}: {}", setting.key, setting.value),
                OutputFormat::Json | OutputFormat::Csv => print_record(&setting, ctx.format)?,
            }
            Ok(())
        }
        ConfigCommand::Set { key, value } => {
            let key = parse_key(&key)?;
            let value = key.validate(&value)?;

            let mut config = Config::load(path)?;
            config.set(key, value.clone());
            config.save(path)?;
            tracing::debug!(key = key.as_str(), %value, path = %path.display(), "setting stored");

            if !ctx.quiet {
                status(Status::Success, &format!("Set {} = {value}", key.as_str()));
            }
            Ok(())
        }
        ConfigCommand::List => {
            if ctx.format == OutputFormat::Minimal {
                for key in ConfigKey::all() {
                    println!("{}", key.as_str());
                }
                return Ok(());
            }
            let keys: Vec<_> = ConfigKey::all()
                .iter()
                .map(|&key| KeyInfo {
                    key: key.as_str(),
                    description: key.description(),
                    default: key.default_value(),
                })
                .collect();
            print_rows(&keys, ctx.format)
        }
        ConfigCommand::Reset { all, key } => {
            let message = match key {
                Some(raw) if !all => {
                    let key = parse_key(&raw)?;
                    let mut config = Config::load(path)?;
                    config.remove(key);
                    config.save(path)?;
                    format!("Reset {} to {}", key.as_str(), key.default_value())
                }
                // An unreadable file is replaced, not parsed.
                _ => {
                    Config::default().save(path)?;
                    "Reset all settings to their defaults".to_string()
                }
            };
            if !ctx.quiet {
                status(Status::Success, &message);
            }
            Ok(())
        }
        ConfigCommand::Path => {
            if ctx.format == OutputFormat::Minimal {
                println!("{}", path.display());
            } else {
                let state = if path.exists() { "exists" } else { "not created yet" };
                status(Status::Info, &format!("{} ({state})", path.display()));
            }
            Ok(())
        }
    }
}
