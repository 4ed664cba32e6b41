//! Market scenario tests for the full pipeline

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use signatrix::config::EngineConfig;
use signatrix::models::price::{PricePoint, Series};
use signatrix::models::signal::{Direction, VoteComponent};
use signatrix::signals::engine::SignalEngine;
use std::collections::BTreeSet;

fn ts(i: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(i)
}

fn series_from_closes(closes: &[f64]) -> Series {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            timestamp: ts(i as i64),
            open: close,
            high: close + 0.1,
            low: close - 0.1,
            close,
        })
        .collect();
    Series::from_points(points).unwrap()
}

/// Components that follow the trend rather than fade it. A monotone series
/// maxes out this subset, which is what makes the Buy/Sell classification
/// assertable (the contrarian RSI/Bollinger votes cap the full set at
/// Neutral on a steady trend).
fn trend_following_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.vote_components = [
        VoteComponent::Macd,
        VoteComponent::EmaCross,
        VoteComponent::Trend,
    ]
    .into_iter()
    .collect::<BTreeSet<_>>();
    config
}

#[test]
fn constant_series_is_neutral_with_collapsed_bands() {
    let closes = vec![100.0; 250];
    let series = series_from_closes(&closes);
    let (signal, set) =
        SignalEngine::compute_with_indicators(&series, &EngineConfig::default()).unwrap();

    assert_eq!(signal.direction, Direction::Neutral);

    let row = closes.len() - 1;
    // Flat window: RSI sits at the 50 convention, never NaN.
    assert_eq!(set.rsi[row], Some(50.0));
    assert!(set.macd_line[row].unwrap().abs() < 1e-9);
    // Bands collapse exactly onto the constant price.
    assert_eq!(set.bollinger_upper[row], Some(100.0));
    assert_eq!(set.bollinger_mid[row], Some(100.0));
    assert_eq!(set.bollinger_lower[row], Some(100.0));
}

#[test]
fn rising_series_votes_follow_the_rule_table() {
    let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    let (signal, set) =
        SignalEngine::compute_with_indicators(&series, &EngineConfig::default()).unwrap();

    let row = closes.len() - 1;
    // EMA ordering holds once all spans are warmed up.
    assert!(set.ema_fast[row].unwrap() > set.ema_slow[row].unwrap());
    assert!(set.ema_slow[row].unwrap() > set.ema_trend[row].unwrap());
    // All-gain window pins RSI at 100: defined, overbought, contrarian vote.
    assert_eq!(set.rsi[row], Some(100.0));

    assert_eq!(signal.component_votes[&VoteComponent::EmaCross], 1);
    assert_eq!(signal.component_votes[&VoteComponent::Trend], 1);
    assert_eq!(signal.component_votes[&VoteComponent::Macd], 1);
    assert_eq!(signal.component_votes[&VoteComponent::Rsi], -1);
    assert_ne!(signal.direction, Direction::Sell);
}

#[test]
fn falling_series_votes_follow_the_rule_table() {
    let closes: Vec<f64> = (0..250).map(|i| 400.0 - i as f64).collect();
    let series = series_from_closes(&closes);
    let (signal, set) =
        SignalEngine::compute_with_indicators(&series, &EngineConfig::default()).unwrap();

    let row = closes.len() - 1;
    assert!(set.ema_fast[row].unwrap() < set.ema_slow[row].unwrap());
    assert_eq!(set.rsi[row], Some(0.0));

    assert_eq!(signal.component_votes[&VoteComponent::EmaCross], -1);
    assert_eq!(signal.component_votes[&VoteComponent::Trend], -1);
    assert_eq!(signal.component_votes[&VoteComponent::Macd], -1);
    assert_eq!(signal.component_votes[&VoteComponent::Rsi], 1);
    assert_ne!(signal.direction, Direction::Buy);
}

#[test]
fn rising_series_classifies_buy_for_trend_followers() {
    let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64 * 0.5).collect();
    let series = series_from_closes(&closes);
    let signal = SignalEngine::compute(&series, &trend_following_config()).unwrap();
    assert_eq!(signal.score, 3);
    assert_eq!(signal.direction, Direction::Buy);
    assert_eq!(signal.confidence, 100.0);
}

#[test]
fn falling_series_classifies_sell_for_trend_followers() {
    let closes: Vec<f64> = (0..250).map(|i| 250.0 - i as f64 * 0.5).collect();
    let series = series_from_closes(&closes);
    let signal = SignalEngine::compute(&series, &trend_following_config()).unwrap();
    assert_eq!(signal.score, -3);
    assert_eq!(signal.direction, Direction::Sell);
    assert_eq!(signal.confidence, 100.0);
}

#[test]
fn ranging_series_never_produces_nan_confidence() {
    let closes: Vec<f64> = (0..250)
        .map(|i| 100.0 + ((i % 20) as f64 - 10.0) * 0.3)
        .collect();
    let series = series_from_closes(&closes);
    let signal = SignalEngine::compute(&series, &EngineConfig::default()).unwrap();
    assert!(signal.confidence.is_finite());
    assert!((0.0..=100.0).contains(&signal.confidence));
}

/// The engine holds no process-wide state, so concurrent computations over
/// independent series must match their sequential counterparts regardless of
/// interleaving.
#[test]
fn concurrent_computations_are_independent() {
    let config = EngineConfig::default();

    let make_series = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut close = 100.0;
        let closes: Vec<f64> = (0..250)
            .map(|_| {
                close += rng.gen_range(-1.0..1.0);
                close
            })
            .collect();
        series_from_closes(&closes)
    };

    let inputs: Vec<Series> = (0..8).map(|i| make_series(i as u64)).collect();
    let expected: Vec<_> = inputs
        .iter()
        .map(|s| SignalEngine::compute(s, &config).unwrap())
        .collect();

    let config_ref = &config;
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|series| scope.spawn(move || SignalEngine::compute(series, config_ref).unwrap()))
            .collect();
        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
