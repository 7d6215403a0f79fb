//! Common types used throughout the rating calculator

use serde::{Deserialize, Serialize};
use skillratings::Outcomes;

/// A competitor's current skill estimate. Unbounded and may be negative.
pub type Rating = f64;

/// Unique identifier for players
pub type PlayerId = String;

/// Result of a match from player one's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Draw,
    PlayerOneWin,
    PlayerTwoWin,
}

impl Outcome {
    /// Actual scores (S1, S2) for this outcome: 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn actual_scores(self) -> (f64, f64) {
        match self {
            Outcome::PlayerOneWin => (1.0, 0.0),
            Outcome::PlayerTwoWin => (0.0, 1.0),
            Outcome::Draw => (0.5, 0.5),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Draw => write!(f, "Draw"),
            Outcome::PlayerOneWin => write!(f, "PlayerOneWin"),
            Outcome::PlayerTwoWin => write!(f, "PlayerTwoWin"),
        }
    }
}

impl From<Outcome> for Outcomes {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerOneWin => Outcomes::WIN,
            Outcome::PlayerTwoWin => Outcomes::LOSS,
            Outcome::Draw => Outcomes::DRAW,
        }
    }
}

impl From<Outcomes> for Outcome {
    fn from(outcome: Outcomes) -> Self {
        match outcome {
            Outcomes::WIN => Outcome::PlayerOneWin,
            Outcomes::LOSS => Outcome::PlayerTwoWin,
            Outcomes::DRAW => Outcome::Draw,
        }
    }
}

/// The result fed into a rating strategy.
///
/// Outcome-based strategies read `outcome`; score-weighted strategies read the
/// two scores. Unused fields keep their defaults (`Draw`, `0`, `0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: Outcome,
    pub player_one_score: u32,
    pub player_two_score: u32,
}

impl MatchResult {
    /// Result for an outcome-based strategy
    pub fn outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            ..Self::default()
        }
    }

    /// Result for a score-weighted strategy
    pub fn scores(player_one_score: u32, player_two_score: u32) -> Self {
        Self {
            outcome: Outcome::Draw,
            player_one_score,
            player_two_score,
        }
    }

    /// Whether an ignore-draws policy should skip this result.
    ///
    /// Only a `Draw` outcome with equal scores counts, so a scored result
    /// such as 12-8 is never skipped even though its outcome field is `Draw`.
    pub fn is_ignorable_draw(&self) -> bool {
        self.outcome == Outcome::Draw && self.player_one_score == self.player_two_score
    }
}

/// Each player's odds to win, between 0 (no chance) and 1 (certain)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOdds {
    pub player_one_odds: f64,
    pub player_two_odds: f64,
}

/// A rated player, usable directly as a match participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub rating: Rating,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, rating: Rating) -> Self {
        Self {
            id: id.into(),
            rating,
        }
    }
}
