//! Indicator column computation
//!
//! Each indicator produces a full column aligned with the source series;
//! indices inside the warm-up region are `None`. Defined values are always
//! finite — numeric edge cases resolve to an explicit value (see RSI), never
//! to NaN.

pub mod momentum;
pub mod trend;
pub mod volatility;

use crate::config::EngineConfig;
use crate::models::indicators::IndicatorSet;
use crate::models::price::Series;

/// Compute every configured indicator column over the series.
pub fn compute_columns(series: &Series, config: &EngineConfig) -> IndicatorSet {
    let closes = series.closes();
    let macd = momentum::macd_columns(
        &closes,
        config.macd_spans.fast,
        config.macd_spans.slow,
        config.macd_spans.signal,
    );
    let bands = volatility::bollinger_columns(&closes, config.bollinger.window, config.bollinger.k);

    IndicatorSet {
        ema_fast: trend::ema_column(&closes, config.ema_spans.short),
        ema_slow: trend::ema_column(&closes, config.ema_spans.medium),
        ema_trend: trend::ema_column(&closes, config.ema_spans.long),
        rsi: momentum::rsi_column(&closes, config.rsi_period),
        macd_line: macd.line,
        macd_signal_line: macd.signal,
        bollinger_upper: bands.upper,
        bollinger_mid: bands.mid,
        bollinger_lower: bands.lower,
    }
}
