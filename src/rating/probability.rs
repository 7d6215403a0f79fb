//! Logistic win-probability model shared by the rating strategies

use crate::types::{MatchOdds, Rating};

/// Expected scores (E1, E2) for two ratings.
///
/// `E1 = 1 / (1 + 10^((r2 - r1) / deviation))` and `E2 = 1 - E1`. This is the
/// same value as `10^(r1/d) / (10^(r1/d) + 10^(r2/d))` but does not overflow
/// for large ratings or small deviations.
pub fn expected_scores(player_one: Rating, player_two: Rating, deviation: f64) -> (f64, f64) {
    let e1 = 1.0 / (1.0 + 10f64.powf((player_two - player_one) / deviation));
    (e1, 1.0 - e1)
}

/// Win odds for both players
pub fn match_odds(player_one: Rating, player_two: Rating, deviation: f64) -> MatchOdds {
    let (player_one_odds, player_two_odds) = expected_scores(player_one, player_two, deviation);
    MatchOdds {
        player_one_odds,
        player_two_odds,
    }
}
