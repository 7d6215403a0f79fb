//! Elo Match - Configurable Elo ratings for two-player matches
//!
//! This crate computes updated ratings for two competitors after a match,
//! from either a win/loss/draw outcome or a final score. A shared
//! [`Calculator`] holds the default tuning and strategy; per-pair [`Match`]
//! sessions inherit it, may override any parameter and are played once.

pub mod calculator;
pub mod config;
pub mod error;
pub mod rating;
pub mod session;
pub mod types;

// Re-export commonly used types and traits
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use calculator::{Calculator, CalculatorBuilder};
pub use config::{CalculatorConfig, TuningParameters};
pub use rating::{
    FnStrategy, OutcomeStrategy, RatingStrategy, ScoreWeightedStrategy, StrategyInput,
    StrategyKind,
};
pub use session::{Match, RatingHolder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
