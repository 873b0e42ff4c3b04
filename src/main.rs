//! healthsource-risk CLI.
//!
//! Reads one `HealthMetrics` JSON object from stdin and prints the
//! assessment to stdout. Logs go to stderr so stdout stays machine-readable.
//!
//! # Usage
//!
//! ```bash
//! echo '{"heartRate":72,"systolicBP":118,"diastolicBP":76,"bmi":22,"age":35,"gender":"female"}' \
//!     | healthsource-risk [--weighted] [--pretty]
//! ```

use std::io::Read;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use healthsource_risk::{assess_risk, weighted_score, HealthMetrics};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut weighted = false;
    let mut pretty = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--weighted" => weighted = true,
            "--pretty" => pretty = true,
            "--help" | "-h" => {
                eprintln!(
                    "Usage: healthsource-risk [--weighted] [--pretty]\n\
                     Reads HealthMetrics JSON from stdin and prints the assessment as JSON."
                );
                return Ok(());
            }
            other => bail!("Unknown argument: {other}"),
        }
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let metrics: HealthMetrics =
        serde_json::from_str(&input).context("Failed to parse HealthMetrics JSON")?;

    tracing::info!("Scoring metrics (weighted={})", weighted);

    let output = if weighted {
        serde_json::json!({ "score": weighted_score(&metrics) })
    } else {
        serde_json::to_value(assess_risk(&metrics))?
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
