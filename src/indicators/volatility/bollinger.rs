//! Bollinger Bands indicator

/// Band columns, aligned with the source closes.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerColumns {
    pub upper: Vec<Option<f64>>,
    pub mid: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Band columns.
///
/// Middle band = SMA(window); upper/lower = middle ± k standard deviations.
/// Uses the population standard deviation (divide by n) — fixed so the band
/// width does not drift between formulations at small window sizes.
pub fn bollinger_columns(closes: &[f64], window: usize, k: f64) -> BollingerColumns {
    let len = closes.len();
    let mut upper = vec![None; len];
    let mut mid = vec![None; len];
    let mut lower = vec![None; len];
    if window == 0 || len < window {
        return BollingerColumns { upper, mid, lower };
    }

    for i in (window - 1)..len {
        let slice = &closes[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance = slice.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / window as f64;
        let std = variance.sqrt();
        mid[i] = Some(mean);
        upper[i] = Some(mean + k * std);
        lower[i] = Some(mean - k * std);
    }

    BollingerColumns { upper, mid, lower }
}
