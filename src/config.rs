//! Runtime configuration from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenv`), so values may come from
//! either place.

use crate::output::OutputFormat;
use std::path::PathBuf;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Output format when the command line does not pick one.
    pub format: OutputFormat,
    /// Colored text output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> (Config, Vec<String>) {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Unknown values keep the default and are returned as messages, since
    /// the logger is configured from this result and does not exist yet.
    pub fn from_lookup<F>(lookup: F) -> (Config, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut rejected = Vec::new();
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse::<OutputFormat>() {
                Ok(format) => config.format = format,
                Err(e) => rejected.push(format!("{ENV_FORMAT}: {e}, using {}", config.format)),
            }
        }
        // https://no-color.org: any non-empty value disables color
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        (config, rejected)
    }
}
