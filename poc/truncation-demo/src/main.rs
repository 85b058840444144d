//! Truncation Demo
//!
//! Builds each membership oracle from a JSON spec, runs it over a synthetic
//! batch of classifier logits and reports which samples survive truncation.

use anyhow::Result;
use ndarray::Array2;
use tracing::info;
use truncset::prelude::*;
use truncset::row_l2_norms;

const SAMPLES: usize = 12;
const CLASSES: usize = 5;

/// Synthetic logits: confidence grows with the row index, so norms sweep
/// from near zero up to a few units.
fn synthetic_logits() -> Array2<f32> {
    Array2::from_shape_fn((SAMPLES, CLASSES), |(i, j)| {
        let confidence = i as f32 * 0.4;
        if j == i % CLASSES {
            confidence
        } else {
            0.1 * ((i + j) as f32).cos()
        }
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("── Truncation Demo ─────────────────────────────────");
    println!();

    let logits = synthetic_logits();
    let norms = row_l2_norms(logits.view());

    println!("  {} samples x {} classes", SAMPLES, CLASSES);
    for (i, norm) in norms.iter().enumerate() {
        println!("  [sample {:>2}] ‖logits‖ = {:.3}", i, norm);
    }
    println!();

    let specs = [
        r#"{"kind": "identity"}"#,
        r#"{"kind": "logit_ball", "bound": 2.0}"#,
        r#"{"kind": "logit_ball_complement", "bound": 2.0}"#,
    ];

    for json in specs {
        let spec = OracleSpec::from_json(json)?;
        let oracle = spec.build()?;
        let flags = oracle.evaluate(logits.view());

        info!(
            oracle = oracle.name(),
            accepted = flags.accepted_count(),
            total = flags.len(),
            "truncation applied"
        );

        let kept: Vec<String> = flags
            .iter()
            .enumerate()
            .filter(|(_, member)| *member)
            .map(|(i, _)| i.to_string())
            .collect();

        println!("── {} ", oracle.name());
        println!("  bound:      {:?}", spec.bound());
        println!(
            "  accepted:   {}/{} ({:.0}%)",
            flags.accepted_count(),
            flags.len(),
            flags.acceptance_rate() * 100.0
        );
        println!("  kept rows:  [{}]", kept.join(", "));
        println!();
    }

    Ok(())
}
