//! Elo rating engine
//!
//! This module provides the logistic win-probability model, the pluggable
//! strategy interface and the two built-in update strategies.

pub mod outcome;
pub mod probability;
pub mod scored;
pub mod strategy;

// Re-export commonly used types
pub use outcome::OutcomeStrategy;
pub use probability::{expected_scores, match_odds};
pub use scored::ScoreWeightedStrategy;
pub use strategy::{FnStrategy, RatingStrategy, StrategyInput, StrategyKind};
