//! Fluent construction of a [`Calculator`]

use crate::calculator::Calculator;
use crate::config::tuning::is_valid_score_weight;
use crate::config::{CalculatorConfig, TuningParameters};
use crate::rating::{OutcomeStrategy, RatingStrategy};
use std::sync::Arc;
use tracing::debug;

/// Builder for [`Calculator`].
///
/// Starts from K = 32, deviation = 400, score weight = 0, draws rated and
/// the outcome strategy.
pub struct CalculatorBuilder {
    tuning: TuningParameters,
    strategy: Arc<dyn RatingStrategy>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self {
            tuning: TuningParameters::default(),
            strategy: Arc::new(OutcomeStrategy),
        }
    }
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from a loaded configuration document
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            tuning: config.tuning,
            strategy: config.strategy.build(),
        }
    }

    /// Set the strategy for calculating ratings. Default is [`OutcomeStrategy`].
    pub fn with_strategy<S>(self, strategy: S) -> Self
    where
        S: RatingStrategy + 'static,
    {
        self.with_shared_strategy(Arc::new(strategy))
    }

    /// Set a strategy that is already shared elsewhere
    pub fn with_shared_strategy(mut self, strategy: Arc<dyn RatingStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the K value. A greater K means more rapid changes. Not validated.
    pub fn with_k_value(mut self, k: f64) -> Self {
        self.tuning.k = k;
        self
    }

    /// Set the deviation. The lower the number, the greater the probability
    /// that the higher-rated player wins (and therefore the less they gain).
    /// Not validated.
    pub fn with_deviation(mut self, deviation: f64) -> Self {
        self.tuning.deviation = deviation;
        self
    }

    /// Set the score weight. Values outside [0, 1] leave the weight unchanged.
    pub fn with_score_weight(mut self, weight: f64) -> Self {
        if is_valid_score_weight(weight) {
            self.tuning.score_weight = weight;
        } else {
            debug!(
                "Ignoring invalid score weight {}, keeping {}",
                weight, self.tuning.score_weight
            );
        }
        self
    }

    /// Leave ratings untouched when a match is drawn
    pub fn with_ignore_draws(mut self) -> Self {
        self.tuning.ignore_draws = true;
        self
    }

    pub fn build(self) -> Calculator {
        Calculator::new(self.tuning, self.strategy)
    }
}
