//! Rule-table votes and score classification

use crate::models::indicators::IndicatorSet;
use crate::models::signal::{Direction, VoteComponent};

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Evaluate one component's vote at a row.
///
/// +1 bullish, -1 bearish, 0 neutral. Any component whose inputs are
/// undefined at the row votes 0 — never skipped, never NaN-compared.
pub fn component_vote(
    component: VoteComponent,
    indicators: &IndicatorSet,
    close: f64,
    row: usize,
) -> i8 {
    match component {
        VoteComponent::Rsi => match indicators.rsi[row] {
            Some(rsi) if rsi < RSI_OVERSOLD => 1,
            Some(rsi) if rsi > RSI_OVERBOUGHT => -1,
            _ => 0,
        },
        VoteComponent::Macd => {
            match (indicators.macd_line[row], indicators.macd_signal_line[row]) {
                (Some(line), Some(signal)) if line > signal => 1,
                (Some(line), Some(signal)) if line < signal => -1,
                _ => 0,
            }
        }
        VoteComponent::EmaCross => match (indicators.ema_fast[row], indicators.ema_slow[row]) {
            (Some(fast), Some(slow)) if fast > slow => 1,
            (Some(fast), Some(slow)) if fast < slow => -1,
            _ => 0,
        },
        VoteComponent::Bollinger => {
            match (indicators.bollinger_lower[row], indicators.bollinger_upper[row]) {
                (Some(lower), _) if close < lower => 1,
                (_, Some(upper)) if close > upper => -1,
                _ => 0,
            }
        }
        VoteComponent::Trend => match indicators.ema_trend[row] {
            Some(trend) if close > trend => 1,
            Some(trend) if close < trend => -1,
            _ => 0,
        },
    }
}

/// Votes needed for a directional call: `ceil(fraction * active)`.
pub fn buy_sell_threshold(active_components: usize, fraction: f64) -> i32 {
    (fraction * active_components as f64).ceil() as i32
}

/// Classify an aggregate score against a symmetric threshold.
pub fn classify(score: i32, threshold: i32) -> Direction {
    if score >= threshold {
        Direction::Buy
    } else if score <= -threshold {
        Direction::Sell
    } else {
        Direction::Neutral
    }
}

/// Confidence as the share of agreeing components, as a percentage.
pub fn confidence(score: i32, active_components: usize) -> f64 {
    if active_components == 0 {
        return 0.0;
    }
    let pct = score.abs() as f64 / active_components as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}
