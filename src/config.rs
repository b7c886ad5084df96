//! Configuration module
//!
//! Loads account-model settings from environment variables. Everything has
//! a default, so `from_env` only fails on values that are present but
//! unparseable.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Account-model configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared interest rate in percent
    pub interest_rate: Decimal,

    /// First transaction id handed out
    pub transaction_seed: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let interest_rate = env::var("TELLER_INTEREST_RATE")
            .unwrap_or_else(|_| "0.5".to_string())
            .parse::<Decimal>()
            .map_err(|_| ConfigError::InvalidValue("TELLER_INTEREST_RATE"))?;
        if interest_rate < Decimal::ZERO {
            return Err(ConfigError::InvalidValue("TELLER_INTEREST_RATE"));
        }

        let transaction_seed = env::var("TELLER_TRANSACTION_SEED")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TELLER_TRANSACTION_SEED"))?;

        Ok(Self {
            interest_rate,
            transaction_seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interest_rate: Decimal::from_str("0.5").expect("Invalid default rate constant"),
            transaction_seed: 100,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
