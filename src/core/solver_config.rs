// src/core/solver_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Solver configuration, loadable from `four_squares.toml` and
/// `FOUR_SQUARES_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Inputs at or above 2^fcm_threshold_bits take the FCM path.
    pub fcm_threshold_bits: u32,

    /// Number of race workers. `None` means hardware parallelism.
    pub workers: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            fcm_threshold_bits: 500,
            workers: None,
            log_level: "info".to_string(),
        }
    }
}

impl SolverConfig {
    /// Load configuration with precedence: config file -> env vars -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("fcm_threshold_bits", 500)?
            .set_default("log_level", "info")?;

        if Path::new("four_squares.toml").exists() {
            builder = builder.add_source(File::with_name("four_squares"));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOUR_SQUARES")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
