//! Score-weighted rating strategy
//!
//! The winner's actual score is raised above their expected score by a
//! surplus that grows with how dominant the final score was and shrinks
//! the more the winner was already favored.

use crate::rating::probability::expected_scores;
use crate::rating::strategy::{RatingStrategy, StrategyInput};
use crate::types::Rating;
use std::cmp::Ordering;
use tracing::trace;

/// Rates a match from its final score. The outcome field is ignored.
///
/// - A score of exactly zero on either side is a full win/loss. Player one
///   is checked first, so 0-0 counts as a loss for player one.
/// - Equal non-zero scores are a draw.
/// - Otherwise the winner gets `S = E_w + G` and the loser `S = E_l - G`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreWeightedStrategy;

impl ScoreWeightedStrategy {
    /// Infallible form of [`RatingStrategy::compute`]
    pub fn rate(input: &StrategyInput) -> (Rating, Rating) {
        let expected = expected_scores(input.player_one, input.player_two, input.deviation);
        let (e1, e2) = expected;
        let s1 = input.player_one_score;
        let s2 = input.player_two_score;

        let actual = if s1 == 0 {
            (0.0, 1.0)
        } else if s2 == 0 {
            (1.0, 0.0)
        } else {
            match s1.cmp(&s2) {
                Ordering::Greater => weighted_actual_scores(
                    f64::from(s1),
                    f64::from(s2),
                    e1,
                    e2,
                    input.score_weight,
                ),
                Ordering::Less => {
                    let (winner, loser) = weighted_actual_scores(
                        f64::from(s2),
                        f64::from(s1),
                        e2,
                        e1,
                        input.score_weight,
                    );
                    (loser, winner)
                }
                Ordering::Equal => (0.5, 0.5),
            }
        };

        trace!(
            "Score-weighted strategy: scores={}-{}, expected={:?}, actual={:?}",
            s1,
            s2,
            expected,
            actual
        );

        input.apply(actual, expected)
    }
}

impl RatingStrategy for ScoreWeightedStrategy {
    fn compute(&self, input: &StrategyInput) -> crate::error::Result<(Rating, Rating)> {
        Ok(Self::rate(input))
    }

    fn name(&self) -> &str {
        "score_weighted"
    }
}

/// Actual scores (winner, loser) for a decided match where both scores are positive.
///
/// `S_w + S_l == E_w + E_l == 1`, so the update stays zero-sum.
fn weighted_actual_scores(
    winner_score: f64,
    loser_score: f64,
    winner_expected: f64,
    loser_expected: f64,
    weight: f64,
) -> (f64, f64) {
    // Dominance ratio, in (0.5, 1)
    let dominance = winner_score / (winner_score + loser_score);
    let surplus = (1.0 - winner_expected) * dominance * (-weight * winner_expected).exp();

    (winner_expected + surplus, loser_expected - surplus)
}
