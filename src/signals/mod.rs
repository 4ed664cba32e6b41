//! Signal evaluation interfaces.

pub mod engine;
pub mod scoring;

pub use engine::SignalEngine;
pub use scoring::*;
