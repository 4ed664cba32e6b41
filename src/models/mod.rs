//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod signal;

pub use indicators::IndicatorSet;
pub use price::{PricePoint, RawSample, Series};
pub use signal::{Direction, Signal, VoteComponent};
