//! # Reporting
//!
//! Turns classified samples into something a person or a renderer can use:
//!
//! - [`render_table`]: text table with percentages rounded to two decimals
//! - [`write_csv`]: the input rows with ratios and zones appended
//! - [`ZoneSummary`]: per-zone tally, optionally colorized
//! - [`PlotDocument`]: JSON chart description for an external ternary renderer
//! - [`Comparison`]: two datasets side by side

mod compare;
mod plot;
mod summary;
mod table;


pub use compare::Comparison;
pub use plot::{
    zone_traces, AxisLayout, MarkerStyle, PlotDocument, SampleMarker, TableRow, TernaryLayout,
    ZoneTrace, COMPARISON_MARKER_SIZE, DEFAULT_TITLE, MARKER_SIZE,
};
pub use summary::ZoneSummary;
pub use table::{render_table, write_csv};
