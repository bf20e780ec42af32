//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present but never required, and
//! nothing here writes to stdout, which belongs to the conversation.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default day window for the `birthdays` command (default: 7)
    pub upcoming_window_days: u32,

    /// Disable ANSI colors in replies (default: false)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_WINDOW_DAYS`: Default day window for the `birthdays`
    ///   command (default: 7)
    /// - `NO_COLOR`: Any non-empty value disables colored output
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let upcoming_window_days = Self::parse_env_u32("UPCOMING_WINDOW_DAYS", 7)?;

        let no_color = env::var("NO_COLOR")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Ok(Config {
            upcoming_window_days,
            no_color,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number of days, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_window_days: 7,
            no_color: false,
        }
    }
}
