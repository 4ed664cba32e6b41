//! Trend indicators

pub mod ema;

pub use ema::ema_column;
