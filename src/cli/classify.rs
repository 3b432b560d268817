use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use duval::ingest::{GasRecordReader, IngestConfig};
use duval::pipeline::{classify_batch, BatchOutcome, InvalidPolicy};
use duval::report::{render_table, write_csv, PlotDocument, ZoneSummary, DEFAULT_TITLE};

use super::{Config, OutputFormat};

/// Read a gas record file and classify every row
pub(super) fn load_outcome(path: &Path, ingest: &IngestConfig) -> Result<BatchOutcome> {
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }

    let reader = GasRecordReader::open(path, ingest)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BatchOutcome::collect(classify_batch(reader.collect())))
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

/// Classify a gas record file and print or write the results
pub fn run(
    input: String,
    format: OutputFormat,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    on_invalid: Option<InvalidPolicy>,
    delimiter: Option<char>,
    title: Option<String>,
) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let ingest = config.ingest_config(delimiter)?;
    let policy = on_invalid.or(config.input.on_invalid).unwrap_or_default();
    let path = config.resolve_input(&input);

    info!("Duval Triangle Classification");
    info!("=============================");
    info!("Input:  {}", path.display());
    info!("Format: {:?}", format);
    info!("Invalid rows: {}", policy);

    let outcome = load_outcome(&path, &ingest)?
        .apply_policy(policy)
        .context("Aborting on invalid sample")?;
    let summary = ZoneSummary::from_outcome(input.as_str(), &outcome);

    let mut writer = open_output(output.as_deref())?;
    match format {
        OutputFormat::Table => {
            write!(writer, "{}", render_table(&outcome.classified))?;
            writeln!(writer)?;
            if output.is_some() {
                write!(writer, "{}", summary)?;
            } else {
                write!(writer, "{}", summary.format_colored())?;
            }
        }
        OutputFormat::Csv => {
            write_csv(&outcome.classified, &mut writer).context("Failed to write CSV")?;
        }
        OutputFormat::Json => {
            let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
            let document = PlotDocument::new(title, &outcome.classified);
            writeln!(writer, "{}", document.to_json_pretty()?)?;
        }
    }
    writer.flush()?;

    info!("Classification complete!");
    info!("  Samples classified: {}", summary.total);
    info!("  Unclassified: {}", summary.unclassified);
    info!("  On shared boundaries: {}", summary.ambiguous);
    if let Some(path) = &output {
        info!("  Output written to {}", path.display());
    }

    Ok(())
}
