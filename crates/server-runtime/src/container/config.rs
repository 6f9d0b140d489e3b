//! # Server Configuration
//!
//! Defaults overridden by `BART_*` environment variables. Invalid values are
//! rejected rather than silently ignored.

use rc_10_bart::{BartConfig, NotifyFailurePolicy};
use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use thiserror::Error;

/// Environment variable selecting the notify-failure policy.
pub const ENV_NOTIFY_POLICY: &str = "BART_NOTIFY_POLICY";
/// Environment variable for the event bus capacity.
pub const ENV_BUS_CAPACITY: &str = "BART_BUS_CAPACITY";
/// Environment variable for the default log level.
pub const ENV_LOG_LEVEL: &str = "BART_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Complete server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// BART service configuration.
    pub bart: BartConfig,
    /// Event bus configuration.
    pub bus: BusConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup(ENV_NOTIFY_POLICY) {
            config.bart.notify_failure_policy =
                policy
                    .parse::<NotifyFailurePolicy>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: ENV_NOTIFY_POLICY,
                        value: policy.clone(),
                    })?;
        }

        if let Some(capacity) = lookup(ENV_BUS_CAPACITY) {
            config.bus.capacity =
                capacity
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: ENV_BUS_CAPACITY,
                        value: capacity.clone(),
                    })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level.trim().to_ascii_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.capacity == 0 {
            return Err(ConfigError::ZeroBusCapacity);
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: self.logging.level.clone(),
            });
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("event bus capacity must be greater than zero")]
    ZeroBusCapacity,
}

/// Event bus configuration.
#[derive(Debug, Clone)]
pub struct BusConfig {
    /// Broadcast channel capacity; slow subscribers lag beyond this.
    pub capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Fallback level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
