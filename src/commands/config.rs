use clap::{Args, Subcommand};
use serde::Serialize;

use renamer::defaults::{self, RenamerConfig};

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore renamer.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a default (kind, sequence_start, collision, protected_shape_key)
    Set {
        key: String,
        value: String,
    },
    /// Reset configuration to built-in defaults
    Reset,
    /// Show the path to renamer.json
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<RenamerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

impl ConfigOutput {
    fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            config: None,
            path: None,
            exists: None,
            key: None,
        }
    }
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { key, value } => set(&key, &value),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let config = if builtin {
        RenamerConfig::default()
    } else {
        defaults::load_config()
    };

    Ok((
        ConfigOutput {
            config: Some(config),
            ..ConfigOutput::new("config.show")
        },
        0,
    ))
}

fn set(key: &str, value: &str) -> CmdResult<ConfigOutput> {
    let mut config = defaults::load_config();
    config.set(key, value)?;
    defaults::save_config(&config)?;

    Ok((
        ConfigOutput {
            config: Some(config),
            key: Some(key.to_string()),
            ..ConfigOutput::new("config.set")
        },
        0,
    ))
}

fn reset() -> CmdResult<ConfigOutput> {
    let config = defaults::reset_config()?;
    Ok((
        ConfigOutput {
            config: Some(config),
            ..ConfigOutput::new("config.reset")
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    let path = defaults::config_path()?;
    Ok((
        ConfigOutput {
            path: Some(path.display().to_string()),
            exists: Some(defaults::config_exists()),
            ..ConfigOutput::new("config.path")
        },
        0,
    ))
}
