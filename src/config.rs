//! Application constants and environment configuration.

use std::error::Error;
use std::path::PathBuf;

/// log4rs YAML file read at startup when present.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Overrides [`DEFAULT_LOG_CONFIG`].
pub const LOG_CONFIG_ENV: &str = "SUBNET_CALC_LOG_CONFIG";
/// Overrides [`DEFAULT_SUBNET_LIMIT`].
pub const SUBNET_LIMIT_ENV: &str = "SUBNET_CALC_LIMIT";

/// Rows printed by `subnet` unless `--limit` says otherwise. 0 prints all.
pub const DEFAULT_SUBNET_LIMIT: usize = 256;

/// Extra width of the network info banner beyond the longest key.
pub const INFO_TABLE_PAD: usize = 25;
pub const SUBNET_TABLE_WIDTH: usize = 100;

/// Settings for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub subnet_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            subnet_limit: DEFAULT_SUBNET_LIMIT,
        }
    }
}

impl Config {
    /// Read settings from the environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(LOG_CONFIG_ENV) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(limit) = lookup(SUBNET_LIMIT_ENV) {
            config.subnet_limit = limit
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {SUBNET_LIMIT_ENV}='{limit}': {e}"))?;
        }

        Ok(config)
    }
}
