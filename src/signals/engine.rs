//! Main signal evaluation engine.
//!
//! Pure and stateless: `compute(series, config)` owns no shared state, blocks
//! on nothing, and is safe to call concurrently with independent inputs.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::indicators;
use crate::models::indicators::IndicatorSet;
use crate::models::price::{RawSample, Series};
use crate::models::signal::Signal;
use crate::normalizer;
use crate::signals::scoring;
use std::collections::BTreeMap;
use tracing::debug;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a signal over a normalized series.
    pub fn compute(series: &Series, config: &EngineConfig) -> Result<Signal, EngineError> {
        let (signal, _) = Self::compute_with_indicators(series, config)?;
        Ok(signal)
    }

    /// Evaluate a signal and return the full indicator column set, for
    /// callers that chart the indicators alongside the recommendation.
    pub fn compute_with_indicators(
        series: &Series,
        config: &EngineConfig,
    ) -> Result<(Signal, IndicatorSet), EngineError> {
        config.validate()?;

        let required = config.required_samples();
        if series.len() < required {
            return Err(EngineError::InsufficientData {
                required,
                available: series.len(),
            });
        }

        let indicator_set = indicators::compute_columns(series, config);
        let row = series.len() - 1;
        let close = series.latest().close;

        let mut component_votes = BTreeMap::new();
        for &component in &config.vote_components {
            let vote = scoring::component_vote(component, &indicator_set, close, row);
            component_votes.insert(component, vote);
        }

        let score: i32 = component_votes.values().map(|&v| v as i32).sum();
        let active = config.vote_components.len();
        let threshold = scoring::buy_sell_threshold(active, config.buy_sell_threshold_fraction);
        let direction = scoring::classify(score, threshold);
        let confidence = scoring::confidence(score, active);

        debug!(
            score,
            threshold,
            ?direction,
            confidence,
            entry_price = close,
            "signal evaluated"
        );

        Ok((
            Signal {
                score,
                direction,
                confidence,
                entry_price: close,
                component_votes,
            },
            indicator_set,
        ))
    }

    /// Normalize raw provider samples, then evaluate.
    pub fn compute_from_samples(
        samples: Vec<RawSample>,
        config: &EngineConfig,
    ) -> Result<Signal, EngineError> {
        config.validate()?;
        let series = normalizer::normalize(samples, config.required_samples())?;
        Self::compute(&series, config)
    }
}
