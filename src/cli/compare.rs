use anyhow::{Context, Result};
use log::info;
use serde_json::json;
use std::path::PathBuf;

use duval::pipeline::{BatchOutcome, InvalidPolicy};
use duval::report::{Comparison, PlotDocument, ZoneSummary, COMPARISON_MARKER_SIZE};

use super::classify::load_outcome;
use super::{ChartFormat, Config};

/// Classify two datasets and print their zone counts side by side
pub fn run(
    left: String,
    right: String,
    config: Option<PathBuf>,
    on_invalid: Option<InvalidPolicy>,
    delimiter: Option<char>,
    format: ChartFormat,
) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let ingest = config.ingest_config(delimiter)?;
    let policy = on_invalid.or(config.input.on_invalid).unwrap_or_default();
    info!("Invalid rows: {}", policy);

    let load = |name: &str| -> Result<BatchOutcome> {
        let path = config.resolve_input(name);
        info!("Loading {} from {}", name, path.display());
        load_outcome(&path, &ingest)?
            .apply_policy(policy)
            .with_context(|| format!("Aborting on invalid sample in {}", name))
    };
    let left_outcome = load(left.as_str())?;
    let right_outcome = load(right.as_str())?;

    let comparison = Comparison::new(
        ZoneSummary::from_outcome(left.as_str(), &left_outcome),
        ZoneSummary::from_outcome(right.as_str(), &right_outcome),
    );
    let differing: Vec<&str> = comparison
        .differing_zones()
        .iter()
        .map(|z| z.as_str())
        .collect();

    match format {
        ChartFormat::Json => {
            let document = json!({
                "left": PlotDocument::with_marker_size(
                    left.as_str(),
                    &left_outcome.classified,
                    COMPARISON_MARKER_SIZE,
                ),
                "right": PlotDocument::with_marker_size(
                    right.as_str(),
                    &right_outcome.classified,
                    COMPARISON_MARKER_SIZE,
                ),
                "differing_zones": differing,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        ChartFormat::Table => {
            print!("{}", comparison);
            if !differing.is_empty() {
                println!();
                println!("Zones with different counts: {}", differing.join(", "));
            }
            for summary in [&comparison.left, &comparison.right] {
                if let Some(line) = invalid_note(summary) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

/// Footer line for rows that were dropped and kept for reporting
fn invalid_note(summary: &ZoneSummary) -> Option<String> {
    summary.has_invalid().then(|| {
        let rows: Vec<String> = summary.invalid.iter().map(|e| e.row().to_string()).collect();
        format!(
            "{}: {} invalid rows left out (rows {})",
            summary.source,
            summary.invalid.len(),
            rows.join(", ")
        )
    })
}
