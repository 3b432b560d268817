//! # duval
//!
//! Command-line Duval triangle classifier for dissolved gas analysis data.
//!
//! ## Usage
//!
//! ```bash
//! # Classify a CSV of gas measurements
//! duval classify gas_data.csv
//!
//! # Chart document for a ternary renderer
//! duval classify BOSA_T401 --config duval.toml --format json -o t401.json
//!
//! # Compare two transformers
//! duval compare BOSA_T401 BOSA_T402
//!
//! # Print the reference zone outlines
//! duval zones
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
