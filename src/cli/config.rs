//! TOML configuration file support.
//!
//! Instead of passing column names and flags on every run, users can keep them
//! in a config file. The `[transformers]` table maps unit names to data files
//! so a dataset can be selected by name:
//!
//! ```toml
//! # duval.toml
//! [columns]
//! ch4 = "CH4_ppm"
//! c2h4 = "C2H4_ppm"
//! c2h2 = "C2H2_ppm"
//! fault_location = "Fault location"
//! color = "Color"
//!
//! [input]
//! delimiter = ","
//! on_invalid = "report"
//!
//! [transformers]
//! BOSA_T401 = "data/gas_data.csv"
//! BOSA_T402 = "data/gas_data2.csv"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use duval::ingest::{ColumnMapping, IngestConfig};
use duval::pipeline::InvalidPolicy;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "duval.toml";

/// Root configuration structure for duval.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Input column names.
    #[serde(default)]
    pub columns: ColumnMapping,

    /// Input parsing settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Named datasets, one per transformer.
    #[serde(default)]
    pub transformers: BTreeMap<String, PathBuf>,

    /// Directory relative transformer paths are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Configuration for reading input files.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// Field delimiter, a single character (`"tab"` is accepted for `\t`).
    pub delimiter: Option<String>,

    /// What to do with rows that fail to parse.
    pub on_invalid: Option<InvalidPolicy>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the explicit config file, else `duval.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::info!("Using config file {}", fallback.display());
            return Self::from_file(fallback);
        }
        Ok(Self::default())
    }

    /// Map a dataset argument to a file: a registered transformer name wins,
    /// anything else is taken as a path.
    pub fn resolve_input(&self, input: &str) -> PathBuf {
        match self.transformers.get(input) {
            Some(path) if path.is_relative() => match &self.base_dir {
                Some(base) => base.join(path),
                None => path.clone(),
            },
            Some(path) => path.clone(),
            None => PathBuf::from(input),
        }
    }

    /// Build reader settings; a command-line delimiter overrides the file.
    pub fn ingest_config(&self, delimiter_override: Option<char>) -> Result<IngestConfig> {
        let delimiter = match delimiter_override {
            Some(c) => Some(delimiter_byte(c)?),
            None => match self.input.delimiter.as_deref() {
                Some(text) => Some(parse_delimiter(text)?),
                None => None,
            },
        };

        Ok(IngestConfig {
            columns: self.columns.clone(),
            delimiter,
        })
    }
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", c);
    }
    Ok(c as u8)
}

fn parse_delimiter(text: &str) -> Result<u8> {
    if text.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => delimiter_byte(c),
        _ => bail!("Delimiter must be a single character, got '{}'", text),
    }
}
