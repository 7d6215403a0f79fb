//! One-shot match sessions
//!
//! A [`Match`] pairs two rating holders with a private copy of the
//! calculator's tuning parameters and strategy. The copy can be overridden
//! per match. Ratings are read from the holders when the match is played
//! and written back exactly once.

pub mod holder;

pub use holder::RatingHolder;

use crate::config::TuningParameters;
use crate::rating::{match_odds, RatingStrategy, StrategyInput};
use crate::types::{MatchOdds, MatchResult, Outcome, Rating};
use std::sync::Arc;
use tracing::debug;

/// A single match between two players.
///
/// Open until the first [`Match::play`] that updates ratings, finished
/// afterwards. A draw skipped by the ignore-draws rule leaves the match open.
pub struct Match<'a> {
    player_one: &'a mut dyn RatingHolder,
    player_two: &'a mut dyn RatingHolder,
    tuning: TuningParameters,
    strategy: Arc<dyn RatingStrategy>,
    finished: bool,
}

impl<'a> Match<'a> {
    pub(crate) fn new(
        player_one: &'a mut dyn RatingHolder,
        player_two: &'a mut dyn RatingHolder,
        tuning: TuningParameters,
        strategy: Arc<dyn RatingStrategy>,
    ) -> Self {
        Self {
            player_one,
            player_two,
            tuning,
            strategy,
            finished: false,
        }
    }

    /// Set a strategy to be used for this match only
    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: RatingStrategy + 'static,
    {
        self.strategy = Arc::new(strategy);
    }

    pub fn set_shared_strategy(&mut self, strategy: Arc<dyn RatingStrategy>) {
        self.strategy = strategy;
    }

    /// K must be non-negative. A negative value leaves K unchanged.
    pub fn set_k_value(&mut self, k: f64) {
        self.tuning.set_k(k);
    }

    pub fn k_value(&self) -> f64 {
        self.tuning.k
    }

    /// Deviation must be non-negative. A negative value leaves it unchanged.
    pub fn set_deviation(&mut self, deviation: f64) {
        self.tuning.set_deviation(deviation);
    }

    pub fn deviation(&self) -> f64 {
        self.tuning.deviation
    }

    /// Score weight must be in [0, 1]. Other values leave it unchanged.
    pub fn set_score_weight(&mut self, weight: f64) {
        self.tuning.set_score_weight(weight);
    }

    pub fn score_weight(&self) -> f64 {
        self.tuning.score_weight
    }

    pub fn set_ignore_draws(&mut self, ignore: bool) {
        self.tuning.set_ignore_draws(ignore);
    }

    pub fn ignore_draws(&self) -> bool {
        self.tuning.ignore_draws
    }

    pub fn tuning(&self) -> &TuningParameters {
        &self.tuning
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current rating of player one
    pub fn player_one_rating(&self) -> Rating {
        self.player_one.rating()
    }

    /// Current rating of player two
    pub fn player_two_rating(&self) -> Rating {
        self.player_two.rating()
    }

    /// Each player's odds to win at their current ratings
    pub fn odds(&self) -> MatchOdds {
        match_odds(
            self.player_one.rating(),
            self.player_two.rating(),
            self.tuning.deviation,
        )
    }

    /// Rate the match and write the new ratings back to both players.
    ///
    /// Only the first call that actually rates the match has any effect;
    /// later calls return `Ok(())` without touching the ratings. If the
    /// strategy fails, its error is returned and the match stays open.
    pub fn play(&mut self, result: &MatchResult) -> crate::error::Result<()> {
        if self.finished {
            debug!("Match already played, ignoring result {:?}", result);
            return Ok(());
        }
        if self.tuning.ignore_draws && result.is_ignorable_draw() {
            debug!("Ignoring drawn result {:?}", result);
            return Ok(());
        }

        let input = StrategyInput::new(
            self.player_one.rating(),
            self.player_two.rating(),
            result,
            &self.tuning,
        );
        let (new_one, new_two) = self.strategy.compute(&input)?;

        debug!(
            "Match played: {} -> {}, {} -> {}",
            input.player_one, new_one, input.player_two, new_two
        );

        self.player_one.set_rating(new_one);
        self.player_two.set_rating(new_two);
        self.finished = true;
        Ok(())
    }

    /// How much player one stands to gain by winning. Equivalent to how much
    /// player two would lose.
    ///
    /// No scores are supplied, so this may be inaccurate for a
    /// score-weighted strategy.
    pub fn player_one_gain(&self) -> crate::error::Result<f64> {
        let (new_one, _) = self.hypothetical(Outcome::PlayerOneWin)?;
        Ok(new_one - self.player_one.rating())
    }

    /// How much player two stands to gain by winning. Equivalent to how much
    /// player one would lose.
    ///
    /// No scores are supplied, so this may be inaccurate for a
    /// score-weighted strategy.
    pub fn player_two_gain(&self) -> crate::error::Result<f64> {
        let (_, new_two) = self.hypothetical(Outcome::PlayerTwoWin)?;
        Ok(new_two - self.player_two.rating())
    }

    fn hypothetical(&self, outcome: Outcome) -> crate::error::Result<(Rating, Rating)> {
        let input = StrategyInput::new(
            self.player_one.rating(),
            self.player_two.rating(),
            &MatchResult::outcome(outcome),
            &self.tuning,
        );
        self.strategy.compute(&input)
    }
}

impl std::fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("player_one", &self.player_one.rating())
            .field("player_two", &self.player_two.rating())
            .field("tuning", &self.tuning)
            .field("strategy", &self.strategy.name())
            .field("finished", &self.finished)
            .finish()
    }
}
