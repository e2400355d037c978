//! # Configuration
//!
//! Runtime settings for the command loop.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read once at startup and never changes.

use stockroom_core::DEFAULT_PRICE_DECIMALS;

/// Environment variable enabling strict input validation.
pub const STRICT_VAR: &str = "STOCKROOM_STRICT";

/// Environment variable setting decimal places for table prices.
pub const PRICE_DECIMALS_VAR: &str = "STOCKROOM_PRICE_DECIMALS";

/// Largest accepted value for `STOCKROOM_PRICE_DECIMALS`.
pub const MAX_PRICE_DECIMALS: usize = 6;

/// Command loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Reject malformed or out-of-range input instead of coercing it.
    /// Default: false (bad numbers become zero)
    pub strict: bool,

    /// Decimal places for prices in the `display` table.
    /// Default: 2
    pub price_decimals: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            strict: false,
            price_decimals: DEFAULT_PRICE_DECIMALS,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STRICT`: `true/false/1/0/yes/no`
    /// - `STOCKROOM_PRICE_DECIMALS`: `0` to `6`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(value) = lookup(STRICT_VAR) {
            config.strict = parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue(STRICT_VAR.to_string()))?;
        }

        if let Some(value) = lookup(PRICE_DECIMALS_VAR) {
            config.price_decimals = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|decimals| *decimals <= MAX_PRICE_DECIMALS)
                .ok_or_else(|| ConfigError::InvalidValue(PRICE_DECIMALS_VAR.to_string()))?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config.strict);
        assert_eq!(config.price_decimals, 2);
    }

    #[test]
    fn test_strict_flag_values() {
        assert!(load(&[(STRICT_VAR, "true")]).unwrap().strict);
        assert!(load(&[(STRICT_VAR, "YES")]).unwrap().strict);
        assert!(load(&[(STRICT_VAR, " 1 ")]).unwrap().strict);
        assert!(!load(&[(STRICT_VAR, "no")]).unwrap().strict);
        assert!(load(&[(STRICT_VAR, "maybe")]).is_err());
    }

    #[test]
    fn test_price_decimals() {
        assert_eq!(load(&[(PRICE_DECIMALS_VAR, "0")]).unwrap().price_decimals, 0);
        assert_eq!(load(&[(PRICE_DECIMALS_VAR, "6")]).unwrap().price_decimals, 6);

        let err = load(&[(PRICE_DECIMALS_VAR, "7")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_PRICE_DECIMALS");
        assert!(load(&[(PRICE_DECIMALS_VAR, "two")]).is_err());
    }
}
