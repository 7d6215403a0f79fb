//! Rating strategy trait and helpers
//!
//! A strategy maps two ratings, a match result and the tuning parameters to
//! two new ratings. The built-in strategies never fail, but caller-supplied
//! ones may, and their errors propagate out of `calculate` and `play`.

use crate::config::TuningParameters;
use crate::rating::outcome::OutcomeStrategy;
use crate::rating::scored::ScoreWeightedStrategy;
use crate::types::{MatchResult, Outcome, Rating};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything a strategy needs to rate one match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyInput {
    /// Rating of player one
    pub player_one: Rating,
    /// Rating of player two
    pub player_two: Rating,
    /// Read by outcome-based strategies
    pub outcome: Outcome,
    /// Read by score-weighted strategies
    pub player_one_score: u32,
    /// Read by score-weighted strategies
    pub player_two_score: u32,
    pub k: f64,
    pub deviation: f64,
    pub score_weight: f64,
}

impl StrategyInput {
    /// Combine ratings, a result and tuning parameters into one input
    pub fn new(
        player_one: Rating,
        player_two: Rating,
        result: &MatchResult,
        tuning: &TuningParameters,
    ) -> Self {
        Self {
            player_one,
            player_two,
            outcome: result.outcome,
            player_one_score: result.player_one_score,
            player_two_score: result.player_two_score,
            k: tuning.k,
            deviation: tuning.deviation,
            score_weight: tuning.score_weight,
        }
    }

    /// Apply `r' = r + k * (S - E)` to both ratings
    pub fn apply(&self, actual: (f64, f64), expected: (f64, f64)) -> (Rating, Rating) {
        (
            self.player_one + self.k * (actual.0 - expected.0),
            self.player_two + self.k * (actual.1 - expected.1),
        )
    }
}

/// Trait for computing new ratings after a two-player match
#[cfg_attr(test, mockall::automock)]
pub trait RatingStrategy: Send + Sync {
    /// Compute the new ratings of player one and player two, in that order
    fn compute(&self, input: &StrategyInput) -> crate::error::Result<(Rating, Rating)>;

    /// Short name used in diagnostics and configuration dumps
    fn name(&self) -> &str {
        "custom"
    }
}

/// Adapts a closure into a [`RatingStrategy`]
pub struct FnStrategy<F> {
    name: String,
    func: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&StrategyInput) -> crate::error::Result<(Rating, Rating)> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self::named("custom", func)
    }

    pub fn named(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> RatingStrategy for FnStrategy<F>
where
    F: Fn(&StrategyInput) -> crate::error::Result<(Rating, Rating)> + Send + Sync,
{
    fn compute(&self, input: &StrategyInput) -> crate::error::Result<(Rating, Rating)> {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The built-in strategies, selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Outcome,
    ScoreWeighted,
}

impl StrategyKind {
    /// Instantiate the strategy this kind names
    pub fn build(self) -> Arc<dyn RatingStrategy> {
        match self {
            StrategyKind::Outcome => Arc::new(OutcomeStrategy),
            StrategyKind::ScoreWeighted => Arc::new(ScoreWeightedStrategy),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = crate::error::EloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outcome" => Ok(StrategyKind::Outcome),
            "score_weighted" | "scored" => Ok(StrategyKind::ScoreWeighted),
            other => Err(crate::error::EloError::ConfigurationError {
                message: format!("Unknown rating strategy: {}", other),
            }),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Outcome => write!(f, "outcome"),
            StrategyKind::ScoreWeighted => write!(f, "score_weighted"),
        }
    }
}
