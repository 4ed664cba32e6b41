//! Series normalizer
//!
//! Turns a raw, possibly-disordered, possibly-sparse set of price samples
//! into a [`Series`] usable by the indicator engine: sorted ascending by
//! timestamp, duplicates resolved keeping the last-seen sample, and missing
//! OHLC fields synthesized from the close stream.

use crate::error::EngineError;
use crate::models::price::{PricePoint, RawSample, Series};

/// Trailing window (in samples) used to synthesize `high`/`low` from closes
/// when a provider delivers a bare price stream.
pub const SYNTHESIS_WINDOW: usize = 3;

/// Normalize raw samples into a series of at least `min_len` points.
///
/// `min_len` is driven by the longest configured indicator lookback
/// ([`crate::config::EngineConfig::required_samples`]); too few samples is an
/// [`EngineError::InsufficientData`], which callers must treat as "cannot
/// compute a signal" rather than a crash.
pub fn normalize(samples: Vec<RawSample>, min_len: usize) -> Result<Series, EngineError> {
    if samples.is_empty() {
        return Err(EngineError::InvalidSeries {
            reason: "no samples provided".to_string(),
        });
    }

    for sample in &samples {
        let fields = [
            Some(sample.close),
            sample.open,
            sample.high,
            sample.low,
        ];
        if fields.iter().flatten().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidSeries {
                reason: format!("non-finite price at {}", sample.timestamp),
            });
        }
    }

    // Stable sort, then keep the last-seen sample per timestamp.
    let mut sorted = samples;
    sorted.sort_by_key(|s| s.timestamp);
    let mut deduped: Vec<RawSample> = Vec::with_capacity(sorted.len());
    for sample in sorted {
        match deduped.last_mut() {
            Some(last) if last.timestamp == sample.timestamp => *last = sample,
            _ => deduped.push(sample),
        }
    }

    if deduped.len() < min_len {
        return Err(EngineError::InsufficientData {
            required: min_len,
            available: deduped.len(),
        });
    }

    let mut points = Vec::with_capacity(deduped.len());
    for (i, sample) in deduped.iter().enumerate() {
        let open = sample.open.unwrap_or_else(|| {
            if i == 0 {
                sample.close
            } else {
                deduped[i - 1].close
            }
        });
        let window_start = i.saturating_sub(SYNTHESIS_WINDOW - 1);
        let window = &deduped[window_start..=i];
        let high = sample
            .high
            .unwrap_or_else(|| window.iter().map(|s| s.close).fold(f64::MIN, f64::max));
        let low = sample
            .low
            .unwrap_or_else(|| window.iter().map(|s| s.close).fold(f64::MAX, f64::min));
        points.push(PricePoint {
            timestamp: sample.timestamp,
            open,
            high,
            low,
            close: sample.close,
        });
    }

    Series::from_points(points)
}
