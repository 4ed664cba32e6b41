//! Price sample and series types

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw price sample as delivered by an upstream data provider.
///
/// Only `close` is mandatory; the normalizer synthesizes the remaining OHLC
/// fields when a provider delivers a bare price stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
}

impl RawSample {
    /// Close-only sample (OHLC synthesized during normalization).
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            close,
            open: None,
            high: None,
            low: None,
        }
    }

    /// Fully-populated OHLC sample.
    pub fn with_ohlc(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            close,
            open: Some(open),
            high: Some(high),
            low: Some(low),
        }
    }
}

/// One fully-populated candle in a normalized series.
///
/// `high >= max(open, close)` and `low <= min(open, close)` are assumed for
/// indicator validity but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// A chronologically ordered, duplicate-free sequence of price points.
///
/// Construction goes through [`Series::from_points`] (or the normalizer), so
/// holding a `Series` guarantees strictly increasing timestamps. The engine
/// only ever borrows it immutably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series(Vec<PricePoint>);

impl Series {
    /// Build a series from points that are already clean.
    ///
    /// Rejects empty input and non-increasing timestamps; use the normalizer
    /// for raw provider data.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, EngineError> {
        if points.is_empty() {
            return Err(EngineError::InvalidSeries {
                reason: "empty series".to_string(),
            });
        }
        for pair in points.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(EngineError::InvalidSeries {
                    reason: format!(
                        "non-increasing timestamps: {} then {}",
                        pair[0].timestamp, pair[1].timestamp
                    ),
                });
            }
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last point in the series. Safe because a `Series` is never empty.
    pub fn latest(&self) -> &PricePoint {
        &self.0[self.0.len() - 1]
    }

    /// Close column, in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.close).collect()
    }
}
