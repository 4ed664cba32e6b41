//! RSI (Relative Strength Index) indicator

/// Calculate the RSI column.
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss, where the
/// averages are simple rolling means of per-step gain/loss magnitudes over
/// `period`. Defined from index `period` onward (the first `period` diffs).
///
/// When the rolling average loss is exactly zero, RSI is 100 (fully
/// overbought) by definition rather than NaN. Left implicit, the NaN would
/// make every threshold comparison false and silently suppress the vote.
/// When gains and losses are both zero (flat window) RSI is 50.
pub fn rsi_column(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut column = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return column;
    }

    // Per-step gain/loss magnitudes; diffs[i] covers closes[i] - closes[i-1].
    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = change.abs();
        }
    }

    let mut gain_sum: f64 = gains[1..=period].iter().sum();
    let mut loss_sum: f64 = losses[1..=period].iter().sum();
    for i in period..closes.len() {
        if i > period {
            gain_sum += gains[i] - gains[i - period];
            loss_sum += losses[i] - losses[i - period];
        }
        let avg_gain = gain_sum / period as f64;
        let avg_loss = loss_sum / period as f64;

        let rsi = if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                50.0
            } else {
                100.0
            }
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        column[i] = Some(rsi);
    }
    column
}
