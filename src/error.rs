//! Error types for the rating calculator
//!
//! Tuning setters never fail; errors only come from loading a configuration
//! document or from a strategy that cannot produce new ratings.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for rating calculation scenarios
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("Rating strategy failed: {reason}")]
    StrategyFailed { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
