//! Shared rating calculator
//!
//! A [`Calculator`] holds the default tuning parameters and strategy. It rates
//! raw rating pairs directly and creates [`Match`] sessions that inherit its
//! settings.

pub mod builder;

pub use builder::CalculatorBuilder;

use crate::config::TuningParameters;
use crate::rating::{RatingStrategy, StrategyInput};
use crate::session::{Match, RatingHolder};
use crate::types::{MatchResult, Rating};
use std::sync::Arc;
use tracing::debug;

/// Immutable calculator configuration. Cheap to clone; clones share the strategy.
#[derive(Clone)]
pub struct Calculator {
    tuning: TuningParameters,
    strategy: Arc<dyn RatingStrategy>,
}

impl Calculator {
    pub(crate) fn new(tuning: TuningParameters, strategy: Arc<dyn RatingStrategy>) -> Self {
        Self { tuning, strategy }
    }

    /// Start building a calculator from the defaults
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Calculate new ratings for player one and player two, in that order.
    ///
    /// With ignore-draws set, a draw with equal scores returns the inputs
    /// unchanged without running the strategy.
    pub fn calculate(
        &self,
        player_one: Rating,
        player_two: Rating,
        result: &MatchResult,
    ) -> crate::error::Result<(Rating, Rating)> {
        if self.tuning.ignore_draws && result.is_ignorable_draw() {
            debug!("Ignoring draw between {} and {}", player_one, player_two);
            return Ok((player_one, player_two));
        }

        let input = StrategyInput::new(player_one, player_two, result, &self.tuning);
        self.strategy.compute(&input)
    }

    /// Create a match between two players that inherits this calculator's settings
    pub fn new_match<'a>(
        &self,
        player_one: &'a mut dyn RatingHolder,
        player_two: &'a mut dyn RatingHolder,
    ) -> Match<'a> {
        Match::new(
            player_one,
            player_two,
            self.tuning,
            Arc::clone(&self.strategy),
        )
    }

    pub fn tuning(&self) -> &TuningParameters {
        &self.tuning
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "strategy": self.strategy.name(),
            "k": self.tuning.k,
            "deviation": self.tuning.deviation,
            "score_weight": self.tuning.score_weight,
            "ignore_draws": self.tuning.ignore_draws,
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        CalculatorBuilder::new().build()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("tuning", &self.tuning)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EloError;
    use crate::rating::strategy::MockRatingStrategy;
    use crate::rating::{FnStrategy, ScoreWeightedStrategy};
    use crate::types::Outcome;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_calculate() {
        let calculator = Calculator::default();
        let (n1, n2) = calculator
            .calculate(1200.0, 1000.0, &MatchResult::outcome(Outcome::PlayerOneWin))
            .unwrap();

        assert!(((1200.0 - n1).abs() - (1000.0 - n2).abs()).abs() < EPSILON);
        assert!((n1 - 1207.688098).abs() < EPSILON);
        assert!((n2 - 992.311902).abs() < EPSILON);
    }

    #[test]
    fn test_calculate_scored() {
        let calculator = Calculator::builder()
            .with_strategy(ScoreWeightedStrategy)
            .with_score_weight(0.33)
            .with_score_weight(-2.0)
            .build();

        let (n1, n2) = calculator
            .calculate(1200.0, 1000.0, &MatchResult::scores(12, 8))
            .unwrap();

        assert!(((1200.0 - n1).abs() - (1000.0 - n2).abs()).abs() < EPSILON);
        assert!((n1 - 1203.589925).abs() < EPSILON);
        assert!((n2 - 996.410075).abs() < EPSILON);
    }

    #[test]
    fn test_calculate_ignores_draw_without_running_strategy() {
        let mut strategy = MockRatingStrategy::new();
        strategy.expect_compute().never();

        let calculator = Calculator::builder()
            .with_strategy(strategy)
            .with_ignore_draws()
            .build();

        let result = calculator
            .calculate(1200.0, 1000.0, &MatchResult::outcome(Outcome::Draw))
            .unwrap();
        assert_eq!(result, (1200.0, 1000.0));

        let result = calculator
            .calculate(1200.0, 1000.0, &MatchResult::scores(7, 7))
            .unwrap();
        assert_eq!(result, (1200.0, 1000.0));
    }

    #[test]
    fn test_calculate_rates_draw_by_default() {
        let calculator = Calculator::default();
        let (n1, n2) = calculator
            .calculate(1600.0, 1800.0, &MatchResult::outcome(Outcome::Draw))
            .unwrap();

        assert!((n1 - 1608.311902).abs() < EPSILON);
        assert!((n2 - 1791.688098).abs() < EPSILON);
    }

    #[test]
    fn test_calculate_passes_tuning_to_strategy() {
        let mut strategy = MockRatingStrategy::new();
        strategy
            .expect_compute()
            .withf(|input| {
                input.k == 47.0
                    && input.deviation == 200.0
                    && input.score_weight == 0.5
                    && input.player_one_score == 6
                    && input.player_two_score == 3
            })
            .times(1)
            .returning(|input| Ok((input.player_one + 1.0, input.player_two - 1.0)));

        let calculator = Calculator::builder()
            .with_strategy(strategy)
            .with_k_value(47.0)
            .with_deviation(200.0)
            .with_score_weight(0.5)
            .build();

        let result = calculator
            .calculate(1600.0, 1800.0, &MatchResult::scores(6, 3))
            .unwrap();
        assert_eq!(result, (1601.0, 1799.0));
    }

    #[test]
    fn test_strategy_failure_propagates() {
        let calculator = Calculator::builder()
            .with_strategy(FnStrategy::new(|_: &StrategyInput| {
                Err(EloError::StrategyFailed {
                    reason: "rating service unavailable".to_string(),
                }
                .into())
            }))
            .build();

        let err = calculator
            .calculate(1600.0, 1800.0, &MatchResult::outcome(Outcome::PlayerOneWin))
            .unwrap_err();
        assert!(err.to_string().contains("rating service unavailable"));
    }

    #[test]
    fn test_config_json() {
        let calculator = Calculator::builder()
            .with_strategy(ScoreWeightedStrategy)
            .with_k_value(40.0)
            .build();

        let config = calculator.config();
        assert_eq!(config["strategy"], "score_weighted");
        assert_eq!(config["k"], 40.0);
        assert_eq!(config["deviation"], 400.0);
        assert_eq!(config["ignore_draws"], false);
    }

    #[test]
    fn test_clones_share_settings() {
        let calculator = Calculator::builder().with_k_value(20.0).build();
        let clone = calculator.clone();
        assert_eq!(clone.tuning(), calculator.tuning());
        assert_eq!(clone.strategy_name(), "outcome");
    }
}
