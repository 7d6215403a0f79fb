//! Tuning parameters shared by calculators and matches
//!
//! Every setter follows the same validate-and-ignore rule: an out-of-range
//! value is dropped and the previous value stays in place. Nothing is
//! reported back to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default K-factor
pub const DEFAULT_K: f64 = 32.0;

/// Default rating-gap divisor
pub const DEFAULT_DEVIATION: f64 = 400.0;

/// Default score weight (no dampening)
pub const DEFAULT_SCORE_WEIGHT: f64 = 0.0;

/// Parameters fed to a rating strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningParameters {
    /// Maximum rating change per match. A greater K means more rapid changes.
    pub k: f64,
    /// The lower the deviation, the more a rating gap predicts the winner
    pub deviation: f64,
    /// How strongly a favored winner's dominance bonus is suppressed, in [0, 1]
    pub score_weight: f64,
    /// Skip draws instead of rating them
    pub ignore_draws: bool,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            deviation: DEFAULT_DEVIATION,
            score_weight: DEFAULT_SCORE_WEIGHT,
            ignore_draws: false,
        }
    }
}

impl TuningParameters {
    /// Set K. Negative values are ignored.
    pub fn set_k(&mut self, k: f64) {
        if k.is_nan() || k < 0.0 {
            debug!("Ignoring invalid K value {}, keeping {}", k, self.k);
            return;
        }
        self.k = k;
    }

    /// Set the deviation. Negative values are ignored.
    pub fn set_deviation(&mut self, deviation: f64) {
        if deviation.is_nan() || deviation < 0.0 {
            debug!(
                "Ignoring invalid deviation {}, keeping {}",
                deviation, self.deviation
            );
            return;
        }
        self.deviation = deviation;
    }

    /// Set the score weight. Values outside [0, 1] are ignored.
    pub fn set_score_weight(&mut self, weight: f64) {
        if !is_valid_score_weight(weight) {
            debug!(
                "Ignoring invalid score weight {}, keeping {}",
                weight, self.score_weight
            );
            return;
        }
        self.score_weight = weight;
    }

    pub fn set_ignore_draws(&mut self, ignore: bool) {
        self.ignore_draws = ignore;
    }
}

/// Score weights are accepted only in [0, 1]
pub fn is_valid_score_weight(weight: f64) -> bool {
    (0.0..=1.0).contains(&weight)
}
