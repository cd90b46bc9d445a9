// src/config/nums_config.rs

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::number_theory::IntegralOptions;
use crate::sequences::DEFAULT_MAX_ITERATIONS;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumsConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Default integration settings
    pub integral: IntegralOptions,

    /// Sequence generation limits
    pub sequences: SequenceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Steps before a Collatz chain is cut off (default: 5000)
    pub collatz_max_iterations: usize,

    /// Upper bound used by the demo listings (default: 9013)
    pub demo_limit: u64,
}

impl Default for NumsConfig {
    fn default() -> Self {
        NumsConfig {
            log_level: "info".to_string(),
            integral: IntegralOptions::default(),
            sequences: SequenceConfig::default(),
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            collatz_max_iterations: DEFAULT_MAX_ITERATIONS,
            demo_limit: 9013,
        }
    }
}

impl NumsConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("nums.toml").exists() {
            builder = builder.add_source(File::with_name("nums.toml"));
        } else if Path::new("nums.yaml").exists() {
            builder = builder.add_source(File::with_name("nums.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.integral
            .validate()
            .map_err(|e| ConfigError::Message(format!("integral: {}", e)))?;
        if self.sequences.collatz_max_iterations == 0 {
            return Err(ConfigError::Message(
                "sequences: collatz_max_iterations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = NumsConfig::default();
        Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("integral.shapes", defaults.integral.shapes as i64)?
            .set_default("integral.start", defaults.integral.start)?
            .set_default("integral.stop", defaults.integral.stop)?
            .set_default("integral.method", defaults.integral.method.name())?
            .set_default("sequences.collatz_max_iterations", defaults.sequences.collatz_max_iterations as i64)?
            .set_default("sequences.demo_limit", defaults.sequences.demo_limit as i64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. NUMS__INTEGRAL__SHAPES=500
        let config = builder
            .add_source(
                Environment::with_prefix("NUMS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let loaded: NumsConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}
