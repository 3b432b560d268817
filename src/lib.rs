//! # duval - Duval Triangle Fault Classification
//!
//! `duval` classifies dissolved gas analysis (DGA) samples from oil-filled
//! transformers into the fault zones of the Duval triangle (Triangle 1).
//!
//! ## Key Features
//!
//! - **Ratio Normalization**: Raw CH4, C2H4 and C2H2 concentrations in any
//!   consistent unit are converted into ternary percentages summing to 100.
//!
//! - **Zone Classification**: Seven published region predicates (PD, D1, D2,
//!   DT, T1, T2, T3) evaluated with inclusive boundaries. Points on a shared
//!   boundary report every zone they touch.
//!
//! - **Reference Geometry**: The drawn zone outlines as static ternary
//!   coordinates for any renderer.
//!
//! - **Streaming Ingest**: CSV/TSV gas tables with configurable column names;
//!   a bad row is reported on its own and never aborts the batch.
//!
//! ## Quick Start
//!
//! ```rust
//! use duval::gas::GasSample;
//! use duval::zone::classify;
//!
//! let sample = GasSample::new(120.0, 45.0, 3.0);
//! let ratios = sample.normalize();
//! let zones = classify(&ratios);
//!
//! println!("CH4 {:.2}% -> {}", ratios.ch4_pct, zones);
//! ```
//!
//! ## Classifying a File
//!
//! ```rust,no_run
//! use duval::ingest::{GasRecordReader, IngestConfig};
//! use duval::pipeline::{classify_records, BatchOutcome};
//! use duval::report::render_table;
//!
//! let reader = GasRecordReader::open("gas_data.csv", &IngestConfig::default())?;
//! let outcome = BatchOutcome::collect(classify_records(reader));
//! print!("{}", render_table(&outcome.classified));
//! # Ok::<(), duval::ingest::IngestError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`gas`]: Gas samples and the ratio normalizer
//! - [`zone`]: Zone enumeration, predicates and the classifier
//! - [`geometry`]: Static zone outlines in ternary coordinates
//! - [`ingest`]: CSV/TSV record reader
//! - [`pipeline`]: Order-preserving per-record classification
//! - [`report`]: Tables, summaries, comparisons and chart documents
//!
//! ## Zone Thresholds
//!
//! | Zone | Predicate (percentages) |
//! |------|-------------------------|
//! | PD | CH4 ≥ 98, C2H4 ≤ 2, C2H2 ≤ 2 |
//! | D1 | C2H2 ≥ 13, C2H4 ≤ 23 |
//! | D2 | (C2H4 ≥ 23, C2H2 ≥ 29) or (23 ≤ C2H4 ≤ 40, 13 ≤ C2H2 ≤ 29) |
//! | DT | (C2H4 ≥ 40, 15 ≤ C2H2 ≤ 29) or (40 ≤ C2H4 ≤ 50, 13 ≤ C2H2 ≤ 15) or (C2H4 ≤ 50, 4 ≤ C2H2 ≤ 13) |
//! | T1 | 76 ≤ CH4 ≤ 98, C2H2 ≤ 4, C2H4 ≤ 20 |
//! | T2 | 46 ≤ CH4 ≤ 80, 20 ≤ C2H4 ≤ 50, C2H2 ≤ 4 |
//! | T3 | CH4 ≤ 50, C2H2 ≤ 15, C2H4 ≥ 50 |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod gas;
pub mod geometry;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod zone;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::gas::{normalize, GasSample, NormalizedRatios};
    pub use crate::geometry::{zone_polygon, TernaryPoint, ZonePolygon, ZONE_POLYGONS};
    pub use crate::ingest::{
        ColumnMapping, GasRecord, GasRecordReader, IngestConfig, IngestError, SampleError,
    };
    pub use crate::pipeline::{
        classify_batch, classify_record, classify_records, classify_sample, BatchOutcome,
        ClassifiedSample, InvalidPolicy,
    };
    pub use crate::report::{render_table, Comparison, PlotDocument, ZoneSummary};
    pub use crate::zone::{classify, FaultClassification, Zone};
}
