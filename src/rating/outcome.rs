//! Win/loss/draw rating strategy

use crate::rating::probability::expected_scores;
use crate::rating::strategy::{RatingStrategy, StrategyInput};
use crate::types::Rating;
use tracing::trace;

/// Rates a match from its outcome alone: S is 1 for a win, 0.5 for a draw
/// and 0 for a loss. Scores and score weight are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeStrategy;

impl OutcomeStrategy {
    /// Infallible form of [`RatingStrategy::compute`]
    pub fn rate(input: &StrategyInput) -> (Rating, Rating) {
        let expected = expected_scores(input.player_one, input.player_two, input.deviation);
        let actual = input.outcome.actual_scores();

        trace!(
            "Outcome strategy: outcome={}, expected={:?}, actual={:?}",
            input.outcome,
            expected,
            actual
        );

        input.apply(actual, expected)
    }
}

impl RatingStrategy for OutcomeStrategy {
    fn compute(&self, input: &StrategyInput) -> crate::error::Result<(Rating, Rating)> {
        Ok(Self::rate(input))
    }

    fn name(&self) -> &str {
        "outcome"
    }
}
