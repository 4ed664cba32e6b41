//! Engine error taxonomy

use thiserror::Error;

/// Errors surfaced to the caller of the engine.
///
/// Numeric edge cases (RSI zero-loss, warm-up regions) are resolved inside
/// the indicator math and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Not enough samples for the configured indicator lookbacks.
    /// Recoverable: the caller should report "not enough data" rather than
    /// fabricate a directional signal.
    #[error("insufficient data: {required} samples required, {available} available")]
    InsufficientData { required: usize, available: usize },

    /// The input could not be normalized into a valid series.
    #[error("invalid series: {reason}")]
    InvalidSeries { reason: String },

    /// The engine configuration is unusable.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}
