//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_LOOKAHEAD_DAYS;
use std::env;
use std::path::PathBuf;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Largest accepted birthday lookahead window.
pub const MAX_LOOKAHEAD_DAYS: u32 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address book snapshot path (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Upcoming-birthday window in days (default: 7)
    pub birthday_lookahead_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Snapshot file path (default: "addressbook.json")
    /// - `BIRTHDAY_LOOKAHEAD_DAYS`: Upcoming-birthday window (default: 7, max: 365)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let birthday_lookahead_days =
            Self::parse_env_u32("BIRTHDAY_LOOKAHEAD_DAYS", DEFAULT_LOOKAHEAD_DAYS)?;

        if birthday_lookahead_days > MAX_LOOKAHEAD_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_LOOKAHEAD_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_LOOKAHEAD_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            birthday_lookahead_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            birthday_lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["CONTACT_BOOK_PATH", "BIRTHDAY_LOOKAHEAD_DAYS", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_lookahead_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PATH", "/tmp/contacts.json");
        guard.set("BIRTHDAY_LOOKAHEAD_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_lookahead_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PATH", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CONTACT_BOOK_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_lookahead_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_LOOKAHEAD_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_LOOKAHEAD_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "-3");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
