//! Screening engine configuration.
//!
//! Policy figures (poverty guidelines, petition limits, timing windows)
//! load from compiled-in defaults with environment overrides under the
//! `K1_SCREENER` prefix, nested values separated by double underscores:
//!
//! - `K1_SCREENER__POLICY__PETITIONS__COOLDOWN_YEARS=3`
//! - `K1_SCREENER__POLICY__INCOME__ASSET_GAP_MULTIPLIER=5`
//!
//! There is no binary and therefore no `.env` loading here; embedders
//! own their process environment.

mod error;

pub use error::ConfigError;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScreeningPolicy;

/// Root configuration for the screening engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Policy figures consumed by rule evaluation and the calculators.
    #[serde(default)]
    pub policy: ScreeningPolicy,
}

impl ScreeningConfig {
    /// Loads configuration: defaults layered under environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&ScreeningConfig::default())?)
            .add_source(
                config::Environment::default()
                    .prefix("K1_SCREENER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads configuration from a file, with environment overrides on top.
    ///
    /// Used by embedders that ship a yearly policy file alongside the
    /// application instead of baking figures into the build.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&ScreeningConfig::default())?)
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::default()
                    .prefix("K1_SCREENER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates the loaded figures.
    ///
    /// Rejects a mis-sized or non-increasing guideline table, a
    /// non-positive per-member increment, and a zero asset multiplier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()?;
        Ok(())
    }
}
