use chrono::{Duration, TimeZone, Utc};
use signatrix::models::price::RawSample;
use signatrix::signals::engine::SignalEngine;
use signatrix::EngineConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    signatrix::logging::init_logging();

    let config = EngineConfig::default();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    // Synthetic rallying close stream; OHLC is synthesized by the normalizer.
    let samples: Vec<RawSample> = (0..250)
        .map(|i| {
            let wobble = if i % 7 == 0 { -0.4 } else { 0.0 };
            RawSample::new(
                start + Duration::hours(i),
                100.0 + i as f64 * 0.5 + wobble,
            )
        })
        .collect();

    let signal = SignalEngine::compute_from_samples(samples, &config)?;

    println!("Direction: {:?}", signal.direction);
    println!("Score: {}", signal.score);
    println!("Confidence: {:.1}%", signal.confidence);
    println!("Entry price: ${:.2}", signal.entry_price);
    println!("Votes:");
    for (component, vote) in &signal.component_votes {
        println!("  {:+} {}", vote, component.name());
    }

    Ok(())
}
