//! Configuration for the rating calculator
//!
//! This module holds the tuning parameters shared by calculators and
//! matches, and the calculator configuration document with its loaders.

pub mod app;
pub mod tuning;

// Re-export commonly used types
pub use app::{validate_config, CalculatorConfig};
pub use tuning::{TuningParameters, DEFAULT_DEVIATION, DEFAULT_K, DEFAULT_SCORE_WEIGHT};
