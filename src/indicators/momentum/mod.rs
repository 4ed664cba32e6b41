//! Momentum indicators

pub mod macd;
pub mod rsi;

pub use macd::{macd_columns, MacdColumns};
pub use rsi::rsi_column;
