//! Per-timestamp indicator columns

use serde::{Deserialize, Serialize};

/// Indicator values computed over a series, one entry per price point.
///
/// Every column is aligned with the source series; `None` marks the warm-up
/// region where the indicator is not yet defined. The set is built once per
/// engine invocation and never mutated; callers may keep it for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ema_fast: Vec<Option<f64>>,
    pub ema_slow: Vec<Option<f64>>,
    pub ema_trend: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd_line: Vec<Option<f64>>,
    pub macd_signal_line: Vec<Option<f64>>,
    pub bollinger_upper: Vec<Option<f64>>,
    pub bollinger_mid: Vec<Option<f64>>,
    pub bollinger_lower: Vec<Option<f64>>,
}

impl IndicatorSet {
    /// Number of rows (equal to the source series length).
    pub fn len(&self) -> usize {
        self.ema_fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ema_fast.is_empty()
    }
}
