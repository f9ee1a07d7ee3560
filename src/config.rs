use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::ConfigError;

// ---------- Line ----------
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LineConfig {
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

// Reference defaults: buffer of 10, one item every 200ms.
fn default_capacity() -> i64 {
    10
}

fn default_interval_ms() -> u64 {
    200
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            interval_ms: default_interval_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub line: LineConfig,
}

pub fn load(path: &str) -> anyhow::Result<Config> {
    let txt = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&txt)?)
}

/// Carries only values the core may assume valid. Built exclusively through
/// `Config::validate`, so an out-of-range capacity never reaches a buffer.
#[derive(Debug, Clone)]
pub struct ValidatedLineConfig {
    pub capacity: usize,
    pub interval: Duration,
}

impl Config {
    pub fn validate(&self) -> Result<ValidatedLineConfig, ConfigError> {
        if self.line.capacity <= 0 {
            return Err(ConfigError::InvalidCapacity {
                got: self.line.capacity,
            });
        }
        if self.line.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(ValidatedLineConfig {
            capacity: self.line.capacity as usize,
            interval: Duration::from_millis(self.line.interval_ms),
        })
    }
}
