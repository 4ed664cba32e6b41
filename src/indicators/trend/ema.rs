//! EMA (Exponential Moving Average) indicator

/// Calculate the EMA column for a span.
///
/// Recurrence: `ema[0] = close[0]`, `ema[i] = close[i]*α + ema[i-1]*(1-α)`
/// with `α = 2/(span+1)`. The recurrence runs from the first sample, but the
/// value is only reported once `span` points have been seen; earlier indices
/// are `None`.
pub fn ema_column(closes: &[f64], span: usize) -> Vec<Option<f64>> {
    let mut column = vec![None; closes.len()];
    if span == 0 || closes.is_empty() {
        return column;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut ema = closes[0];
    for (i, &close) in closes.iter().enumerate() {
        if i > 0 {
            ema = close * alpha + ema * (1.0 - alpha);
        }
        if i + 1 >= span {
            column[i] = Some(ema);
        }
    }
    column
}
