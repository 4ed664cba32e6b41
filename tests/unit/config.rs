//! Unit tests for engine configuration

use signatrix::config::EngineConfig;
use signatrix::error::EngineError;
use signatrix::models::signal::VoteComponent;

#[test]
fn default_config_is_valid() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn required_samples_follows_longest_active_lookback() {
    let config = EngineConfig::default();
    // Trend filter dominates with the 200-span EMA.
    assert_eq!(config.required_samples(), 200);

    let mut no_trend = config.clone();
    no_trend.vote_components.remove(&VoteComponent::Trend);
    // MACD becomes the longest: slow 26 + signal 9.
    assert_eq!(no_trend.required_samples(), 35);
}

#[test]
fn zero_span_is_rejected() {
    let mut config = EngineConfig::default();
    config.rsi_period = 0;
    assert!(matches!(
        config.validate(),
        Err(EngineError::InvalidConfig { .. })
    ));
}

#[test]
fn fast_span_must_be_below_slow_span() {
    let mut config = EngineConfig::default();
    config.macd_spans.fast = 26;
    config.macd_spans.slow = 12;
    assert!(config.validate().is_err());
}

#[test]
fn empty_component_set_is_rejected() {
    let mut config = EngineConfig::default();
    config.vote_components.clear();
    assert!(config.validate().is_err());
}

#[test]
fn threshold_fraction_bounds() {
    let mut config = EngineConfig::default();
    config.buy_sell_threshold_fraction = 0.0;
    assert!(config.validate().is_err());
    config.buy_sell_threshold_fraction = 1.0;
    assert!(config.validate().is_ok());
    config.buy_sell_threshold_fraction = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
