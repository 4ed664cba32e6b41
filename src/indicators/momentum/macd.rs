//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::ema_column;

/// MACD line and signal line columns, aligned with the source closes.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdColumns {
    pub line: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// Calculate MACD columns.
///
/// MACD line = EMA(fast) - EMA(slow), defined where both EMAs are; signal
/// line = EMA(signal_span) of the MACD line values, with its own warm-up of
/// `signal_span` defined MACD points.
pub fn macd_columns(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> MacdColumns {
    let fast = ema_column(closes, fast_span);
    let slow = ema_column(closes, slow_span);

    let mut line = vec![None; closes.len()];
    let mut defined = Vec::new();
    for i in 0..closes.len() {
        if let (Some(f), Some(s)) = (fast[i], slow[i]) {
            line[i] = Some(f - s);
            defined.push(f - s);
        }
    }

    // The signal line EMA runs over the defined MACD values only, then is
    // mapped back onto series indices.
    let signal_values = ema_column(&defined, signal_span);
    let mut signal = vec![None; closes.len()];
    let mut j = 0;
    for i in 0..closes.len() {
        if line[i].is_some() {
            signal[i] = signal_values[j];
            j += 1;
        }
    }

    MacdColumns { line, signal }
}
