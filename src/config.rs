// Demo configuration, stored as RON

use crate::command::state::ValueType;
use crate::random::DEFAULT_MAGNITUDE_RANGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on `DemoConfig::iterations`
pub const MAX_ITERATIONS: u32 = 1_000_000;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the random command demo
///
/// Missing fields fall back to `DemoConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of demo steps
    pub iterations: u32,
    /// Smallest magnitude of a generated command
    pub min_magnitude: ValueType,
    /// Largest magnitude of a generated command
    pub max_magnitude: ValueType,
    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Roll back every applied command once the steps are done
    pub rollback_all: bool,
    /// Probability that a step rolls back instead of queueing a new command
    pub rollback_probability: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            min_magnitude: DEFAULT_MAGNITUDE_RANGE.0,
            max_magnitude: DEFAULT_MAGNITUDE_RANGE.1,
            seed: None,
            rollback_all: true,
            rollback_probability: 0.25,
        }
    }
}

impl DemoConfig {
    /// Parse and validate a configuration from RON text
    pub fn from_ron_str(ron_data: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = ron::from_str(ron_data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ron_data = fs::read_to_string(path)?;
        Self::from_ron_str(&ron_data)
    }

    /// Check that the values describe a runnable demo
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "iterations must be at least 1".to_string(),
            ));
        }

        if self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::Invalid(format!(
                "iterations ({}) exceeds the maximum of {}",
                self.iterations, MAX_ITERATIONS
            )));
        }

        if self.min_magnitude < 1 {
            return Err(ConfigError::Invalid(
                "min_magnitude must be positive".to_string(),
            ));
        }

        if self.min_magnitude > self.max_magnitude {
            return Err(ConfigError::Invalid(format!(
                "min_magnitude ({}) exceeds max_magnitude ({})",
                self.min_magnitude, self.max_magnitude
            )));
        }

        if !(0.0..=1.0).contains(&self.rollback_probability) {
            return Err(ConfigError::Invalid(format!(
                "rollback_probability must be between 0 and 1, got {}",
                self.rollback_probability
            )));
        }

        Ok(())
    }
}
