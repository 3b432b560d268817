//! # Gas Record Ingest
//!
//! Reads delimited (CSV/TSV) tables of dissolved gas measurements. Each row
//! holds the three gas concentrations plus two pass-through columns, the fault
//! location label and a marker color, which are never interpreted here.
//!
//! ```text
//! Fault location,CH4_ppm,C2H4_ppm,C2H2_ppm,Color
//! Tap changer,120,45,3,red
//! Main tank,80,10,1,blue
//! ```
//!
//! Column names are configurable through [`ColumnMapping`]. A row with a
//! missing or non-numeric gas value yields [`SampleError::InvalidSample`]
//! without affecting the rows around it.

mod columns;
mod error;
mod reader;

#[cfg(test)]
mod tests;

pub use columns::{ColumnMapping, DEFAULT_COLOR};
pub use error::{IngestError, SampleError};
pub use reader::{load_records, GasRecord, GasRecordReader, IngestConfig};
