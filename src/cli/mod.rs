use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use duval::pipeline::InvalidPolicy;

mod classify;
mod compare;
mod config;
mod zones;

pub use config::Config;

/// duval - Duval Triangle DGA Fault Classifier
#[derive(Parser)]
#[command(name = "duval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for classified samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text table followed by a zone summary
    #[default]
    Table,
    /// Input rows with ratios and zones appended
    Csv,
    /// Chart document for a ternary renderer
    Json,
}

/// Output format for commands that have no CSV form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Ternary chart data for a renderer
    Json,
}

/// Handling of rows that fail to parse.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InvalidArg {
    /// Drop invalid rows silently
    Skip,
    /// Drop invalid rows and list them
    Report,
    /// Abort on the first invalid row
    Fail,
}

impl From<InvalidArg> for InvalidPolicy {
    fn from(arg: InvalidArg) -> Self {
        match arg {
            InvalidArg::Skip => InvalidPolicy::Skip,
            InvalidArg::Report => InvalidPolicy::Report,
            InvalidArg::Fail => InvalidPolicy::Fail,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every sample of a gas record file
    Classify {
        /// Input CSV/TSV file, or a transformer name from the config
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output format
        #[arg(short = 'f', long, default_value = "table", value_enum)]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// What to do with rows that fail to parse (default: report)
        #[arg(long, value_enum)]
        on_invalid: Option<InvalidArg>,

        /// Field delimiter (guessed from the extension when omitted)
        #[arg(short = 'd', long)]
        delimiter: Option<char>,

        /// Chart title for JSON output
        #[arg(long)]
        title: Option<String>,
    },

    /// Compare zone counts of two gas record files
    Compare {
        /// First dataset: file path or transformer name
        #[arg(value_name = "LEFT")]
        left: String,

        /// Second dataset: file path or transformer name
        #[arg(value_name = "RIGHT")]
        right: String,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// What to do with rows that fail to parse (default: report)
        #[arg(long, value_enum)]
        on_invalid: Option<InvalidArg>,

        /// Field delimiter (guessed from the extension when omitted)
        #[arg(short = 'd', long)]
        delimiter: Option<char>,

        /// Output format
        #[arg(short = 'f', long, default_value = "table", value_enum)]
        format: ChartFormat,
    },

    /// Print the reference zone outlines
    Zones {
        /// Output format
        #[arg(short = 'f', long, default_value = "table", value_enum)]
        format: ChartFormat,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Classify {
            input,
            format,
            output,
            config,
            on_invalid,
            delimiter,
            title,
        } => classify::run(
            input,
            format,
            output,
            config,
            on_invalid.map(InvalidPolicy::from),
            delimiter,
            title,
        ),
        Commands::Compare {
            left,
            right,
            config,
            on_invalid,
            delimiter,
            format,
        } => compare::run(
            left,
            right,
            config,
            on_invalid.map(InvalidPolicy::from),
            delimiter,
            format,
        ),
        Commands::Zones { format } => zones::run(format),
    }
}
