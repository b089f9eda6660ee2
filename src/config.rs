//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally loaded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::book::SortCase;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book and its demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Case sensitivity of city and state sorting (default: sensitive)
    pub sort_case: SortCase,

    /// Log level (default: "error")
    pub log_level: String,

    /// Whether the demo binary seeds sample contacts (default: true)
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_SORT_CASE`: `sensitive` or `insensitive` (default: sensitive)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESS_BOOK_SEED_DEMO`: `true` or `false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let sort_case = Self::parse_env_sort_case("ADDRESS_BOOK_SORT_CASE", SortCase::Sensitive)?;
        let seed_demo = Self::parse_env_bool("ADDRESS_BOOK_SEED_DEMO", true)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            sort_case,
            log_level,
            seed_demo,
        })
    }

    /// Parse an environment variable as a sort case with a default value.
    fn parse_env_sort_case(var_name: &str, default: SortCase) -> ConfigResult<SortCase> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "sensitive" => Ok(SortCase::Sensitive),
                "insensitive" => Ok(SortCase::Insensitive),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be 'sensitive' or 'insensitive', got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sort_case: SortCase::Sensitive,
            log_level: "error".to_string(),
            seed_demo: true,
        }
    }
}
