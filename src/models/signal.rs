//! Signal output types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
    Neutral,
}

/// A scoring component of the rule table.
///
/// Each active component contributes one vote in `{+1, 0, -1}`; the set of
/// active components is part of the engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VoteComponent {
    Rsi,
    Macd,
    EmaCross,
    Bollinger,
    Trend,
}

impl VoteComponent {
    pub fn name(&self) -> &'static str {
        match self {
            VoteComponent::Rsi => "RSI",
            VoteComponent::Macd => "MACD",
            VoteComponent::EmaCross => "EMA cross",
            VoteComponent::Bollinger => "Bollinger",
            VoteComponent::Trend => "Trend filter",
        }
    }
}

/// The engine's output: one scored recommendation per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Sum of component votes.
    pub score: i32,
    pub direction: Direction,
    /// Strength of agreement among components, 0 to 100.
    pub confidence: f64,
    /// Latest close of the evaluated series.
    pub entry_price: f64,
    /// Per-component vote breakdown for explainability.
    pub component_votes: BTreeMap<VoteComponent, i8>,
}
