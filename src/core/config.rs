//! Configuration for the ring queue
//!
//! A queue is configured by its capacity alone. Values come from a TOML file
//! or fall back to defaults; either way they are validated before a queue is
//! built from them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_CAPACITY;
use crate::structures::ring_queue::is_valid_capacity;
use crate::types::{Error, Result};
use crate::{log_info, log_warn};

/// Queue configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Number of physical slots; a power of two greater than one.
    /// One slot stays free, so `capacity - 1` elements fit.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl QueueConfig {
    /// Configuration for the given capacity, unvalidated
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the capacity against the power-of-two rule
    pub fn validate(&self) -> Result<()> {
        if is_valid_capacity(self.capacity) {
            Ok(())
        } else {
            Err(Error::InvalidCapacity {
                capacity: self.capacity,
            })
        }
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: QueueConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

// Default value functions for serde
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Load configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<QueueConfig> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)?;
    QueueConfig::from_toml_str(&config_str)
        .map_err(|e| match e {
            Error::Toml(inner) => Error::config(format!("{}: {}", path.display(), inner)),
            other => other,
        })
}

/// Load configuration from file or use defaults
pub fn load_config_or_default(path: Option<&str>) -> QueueConfig {
    match path {
        Some(path) => match load_config(path) {
            Ok(config) => {
                log_info!("Loaded configuration from: {}", path);
                config
            }
            Err(e) => {
                log_warn!("Failed to load config from {}: {}. Using defaults.", path, e);
                QueueConfig::default()
            }
        },
        None => {
            log_info!("No config file specified, using defaults");
            QueueConfig::default()
        }
    }
}
