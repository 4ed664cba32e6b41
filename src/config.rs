//! Engine configuration
//!
//! One named, documented rule set replaces the divergent magic numbers found
//! in ad-hoc signal scripts: the indicator spans, the set of active vote
//! components, and the buy/sell threshold fraction are all configuration
//! inputs rather than literals inside the scoring code.

use crate::error::EngineError;
use crate::models::signal::VoteComponent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// EMA spans: a short and medium pair for the crossover vote, plus a long
/// trend filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmaSpans {
    pub short: usize,
    pub medium: usize,
    pub long: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdSpans {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerConfig {
    pub window: usize,
    /// Band width in standard deviations.
    pub k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub ema_spans: EmaSpans,
    pub rsi_period: usize,
    pub macd_spans: MacdSpans,
    pub bollinger: BollingerConfig,
    /// Components participating in the vote. Removing one shrinks `N` in the
    /// classification rule and drops its lookback from the sample requirement.
    pub vote_components: BTreeSet<VoteComponent>,
    /// Fraction of active components that must agree for a directional call.
    /// The threshold is `ceil(fraction * N)`.
    pub buy_sell_threshold_fraction: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ema_spans: EmaSpans {
                short: 9,
                medium: 21,
                long: 200,
            },
            rsi_period: 14,
            macd_spans: MacdSpans {
                fast: 12,
                slow: 26,
                signal: 9,
            },
            bollinger: BollingerConfig { window: 20, k: 2.0 },
            vote_components: [
                VoteComponent::Rsi,
                VoteComponent::Macd,
                VoteComponent::EmaCross,
                VoteComponent::Bollinger,
                VoteComponent::Trend,
            ]
            .into_iter()
            .collect(),
            buy_sell_threshold_fraction: 0.6,
        }
    }
}

impl EngineConfig {
    /// Reject configurations the engine cannot evaluate.
    pub fn validate(&self) -> Result<(), EngineError> {
        let spans = [
            self.ema_spans.short,
            self.ema_spans.medium,
            self.ema_spans.long,
            self.rsi_period,
            self.macd_spans.fast,
            self.macd_spans.slow,
            self.macd_spans.signal,
            self.bollinger.window,
        ];
        if spans.iter().any(|&s| s == 0) {
            return Err(EngineError::InvalidConfig {
                reason: "indicator spans and periods must be non-zero".to_string(),
            });
        }
        if self.macd_spans.fast >= self.macd_spans.slow {
            return Err(EngineError::InvalidConfig {
                reason: "MACD fast span must be shorter than slow span".to_string(),
            });
        }
        if self.vote_components.is_empty() {
            return Err(EngineError::InvalidConfig {
                reason: "at least one vote component must be active".to_string(),
            });
        }
        if !(self.buy_sell_threshold_fraction > 0.0 && self.buy_sell_threshold_fraction <= 1.0) {
            return Err(EngineError::InvalidConfig {
                reason: "buy/sell threshold fraction must be in (0, 1]".to_string(),
            });
        }
        if !self.bollinger.k.is_finite() || self.bollinger.k <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "Bollinger k must be a positive finite number".to_string(),
            });
        }
        Ok(())
    }

    /// Minimum series length: the longest lookback among active components.
    ///
    /// With the trend filter active this is dominated by the long EMA span;
    /// disabling the trend component removes that requirement so short series
    /// can still be scored by the remaining components.
    pub fn required_samples(&self) -> usize {
        self.vote_components
            .iter()
            .map(|component| match component {
                VoteComponent::Rsi => self.rsi_period + 1,
                VoteComponent::Macd => self.macd_spans.slow + self.macd_spans.signal,
                VoteComponent::EmaCross => self.ema_spans.short.max(self.ema_spans.medium),
                VoteComponent::Bollinger => self.bollinger.window,
                VoteComponent::Trend => self.ema_spans.long,
            })
            .max()
            .unwrap_or(1)
    }
}
