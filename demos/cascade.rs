// Evaluate and sample an angular correlation.
//
//     cargo run --example cascade [cascade.json]
//
// Without an argument the 0+ -> 1+ -> 0+ nuclear resonance fluorescence
// cascade with a linearly polarized beam is used.
use std::f64::consts::PI;

use angcorr::{AnalyzingPower, CascadeConfig, Convention, ReferenceFrameSampler};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_CASCADE: &str = r#"{
    "initial_state": {"two_j": 0, "parity": "positive"},
    "steps": [
        {"transition": {"em_char": "magnetic", "two_l": 2}, "state": {"two_j": 2, "parity": "positive"}},
        {"transition": {"em_char": "magnetic", "two_l": 2}, "state": {"two_j": 0, "parity": "positive"}}
    ],
    "sampler": {"seed": 42}
}"#;

fn main() -> angcorr::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CascadeConfig::from_json_file(path)?,
        None => CascadeConfig::from_json_str(DEFAULT_CASCADE)?,
    };

    let w = config.angular_correlation()?;
    let cascade = std::iter::once(w.initial_state().to_string())
        .chain(w.cascade_steps().iter().map(|(transition, state)| format!("[{}] {}", transition, state)))
        .collect::<Vec<_>>()
        .join(" -> ");
    info!("cascade: {}", cascade);

    println!("{:>8} {:>12} {:>12}", "theta", "W(theta, 0)", "W(theta, pi/2)");
    for i in 0..=12 {
        let theta = PI * i as f64 / 12.0;
        println!("{:8.4} {:12.6} {:12.6}", theta, w.eval(theta, 0.0), w.eval(theta, 0.5 * PI));
    }
    println!("upper limit: {:.6}", w.upper_limit());

    if w.is_polarization_sensitive() {
        let analyzing_power = AnalyzingPower::new(w.clone(), Convention::Natural);
        println!("analyzing power at 90 deg: {:+.4}", analyzing_power.eval(0.5 * PI));
    }

    let mut sampler = angcorr::AngCorrRejectionSampler::new(w, config.sampler.seed, config.sampler.max_tries);
    println!("sampler efficiency: {:.4}", sampler.estimate_efficiency(10_000));

    let mut direction_sampler = config.direction_sampler()?;
    println!("sampled directions (theta, phi):");
    for _ in 0..5 {
        let max_tries = direction_sampler.max_tries();
        let directions = direction_sampler
            .sample_with_tries()
            .iter()
            .map(|&(tries, [theta, phi])| {
                if tries == max_tries {
                    "(exhausted)".to_string()
                } else {
                    format!("({:.4}, {:.4})", theta, phi)
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", directions);
    }
    Ok(())
}
