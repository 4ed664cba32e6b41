//! Technical-indicator signal engine for OHLC price series.
//!
//! The crate turns a raw, possibly-disordered set of price samples into a
//! canonical [`models::Series`], computes an indicator column set (EMA family,
//! RSI, MACD, Bollinger Bands) over it, and reduces the latest row to a scored
//! [`models::Signal`] via a deterministic rule table.
//!
//! Fetching candles from a provider, caching, and rendering the signal are the
//! caller's concern; the engine itself is pure and performs no I/O.

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod signals;

pub use config::EngineConfig;
pub use error::EngineError;
pub use models::{Direction, IndicatorSet, PricePoint, RawSample, Series, Signal, VoteComponent};
pub use signals::engine::SignalEngine;
