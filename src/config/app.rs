//! Calculator configuration
//!
//! This module defines the configuration document for a calculator: which
//! built-in strategy to use plus the shared tuning parameters. It can be
//! loaded from environment variables or from TOML and is validated as a whole.

use crate::config::tuning::{is_valid_score_weight, TuningParameters};
use crate::rating::StrategyKind;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Strategy selection and tuning for a calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Built-in strategy to rate matches with
    pub strategy: StrategyKind,
    /// Shared defaults inherited by every match
    pub tuning: TuningParameters,
}

impl CalculatorConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// Recognized keys: `ELO_STRATEGY`, `ELO_K_FACTOR`, `ELO_DEVIATION`,
    /// `ELO_SCORE_WEIGHT`, `ELO_IGNORE_DRAWS`.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(strategy) = lookup("ELO_STRATEGY") {
            config.strategy = strategy.parse()?;
        }
        if let Some(k) = lookup("ELO_K_FACTOR") {
            config.tuning.k = k
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_K_FACTOR value: {}", k))?;
        }
        if let Some(deviation) = lookup("ELO_DEVIATION") {
            config.tuning.deviation = deviation
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DEVIATION value: {}", deviation))?;
        }
        if let Some(weight) = lookup("ELO_SCORE_WEIGHT") {
            config.tuning.score_weight = weight
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_SCORE_WEIGHT value: {}", weight))?;
        }
        if let Some(ignore) = lookup("ELO_IGNORE_DRAWS") {
            config.tuning.ignore_draws = ignore
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_IGNORE_DRAWS value: {}", ignore))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// ```toml
    /// strategy = "score_weighted"
    ///
    /// [tuning]
    /// k = 40.0
    /// score_weight = 0.33
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: Self = toml::from_str(document).map_err(|e| {
            crate::error::EloError::ConfigurationError {
                message: format!("Invalid calculator configuration: {}", e),
            }
        })?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &CalculatorConfig) -> Result<()> {
    let tuning = &config.tuning;

    if tuning.k.is_nan() || tuning.k < 0.0 {
        return Err(anyhow!("K value must be non-negative, got {}", tuning.k));
    }
    if tuning.deviation.is_nan() || tuning.deviation <= 0.0 {
        return Err(anyhow!(
            "Deviation must be positive, got {}",
            tuning.deviation
        ));
    }
    if !is_valid_score_weight(tuning.score_weight) {
        return Err(anyhow!(
            "Score weight must be between 0 and 1, got {}",
            tuning.score_weight
        ));
    }

    Ok(())
}
