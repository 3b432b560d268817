//! Renderer-neutral description of a Duval triangle chart.
//!
//! A [`PlotDocument`] holds everything an external ternary-plot renderer
//! needs: axis titles, the seven reference zone outlines, one marker per
//! sample and the rows of the accompanying table. Drawing is left to the
//! renderer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geometry::{TernaryAxis, TernaryPoint, AXES, AXIS_SUM, ZONE_POLYGONS};
use crate::pipeline::ClassifiedSample;

/// Default chart title
pub const DEFAULT_TITLE: &str = "Duval Triangle Analysis";

/// Marker size on a single-dataset chart
pub const MARKER_SIZE: u32 = 10;

/// Marker size when two charts are shown side by side
pub const COMPARISON_MARKER_SIZE: u32 = 8;

const AXIS_LINE_WIDTH: u32 = 2;

/// One styled axis of the ternary layout
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AxisLayout {
    /// Title and gas
    #[serde(flatten)]
    pub axis: TernaryAxis,
    /// Axis line width in pixels
    pub linewidth: u32,
    /// Tick placement
    pub ticks: &'static str,
}

impl From<TernaryAxis> for AxisLayout {
    fn from(axis: TernaryAxis) -> Self {
        Self {
            axis,
            linewidth: AXIS_LINE_WIDTH,
            ticks: "outside",
        }
    }
}

/// Ternary layout settings
#[derive(Debug, Clone, Serialize)]
pub struct TernaryLayout {
    /// Value every point sums to
    pub sum: f64,
    /// a axis (CH4)
    pub aaxis: AxisLayout,
    /// b axis (C2H2)
    pub baxis: AxisLayout,
    /// c axis (C2H4)
    pub caxis: AxisLayout,
}

impl Default for TernaryLayout {
    fn default() -> Self {
        Self {
            sum: AXIS_SUM,
            aaxis: AXES[0].into(),
            baxis: AXES[1].into(),
            caxis: AXES[2].into(),
        }
    }
}

/// Filled outline of one reference zone
#[derive(Debug, Clone, Serialize)]
pub struct ZoneTrace {
    /// Zone label
    pub name: String,
    /// CH4 values
    pub a: Vec<f64>,
    /// C2H2 values
    pub b: Vec<f64>,
    /// C2H4 values
    pub c: Vec<f64>,
    /// Trace mode
    pub mode: &'static str,
    /// Fill mode
    pub fill: &'static str,
}

/// Marker appearance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    /// Marker shape
    pub symbol: &'static str,
    /// Marker size in pixels
    pub size: u32,
    /// Marker color, passed through from the input
    pub color: String,
}

/// Plotted marker for one sample
#[derive(Debug, Clone, Serialize)]
pub struct SampleMarker {
    /// Legend entry, `"<zones> - <fault location>"`
    pub name: String,
    /// Marker position
    pub point: TernaryPoint,
    /// Trace mode
    pub mode: &'static str,
    /// Shape, size and color
    pub marker: MarkerStyle,
}

/// One line of the table shown below the chart
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    /// Fault location label
    pub fault_location: String,
    /// CH4 percentage rounded to two decimals
    pub ch4_pct: f64,
    /// C2H4 percentage rounded to two decimals
    pub c2h4_pct: f64,
    /// C2H2 percentage rounded to two decimals
    pub c2h2_pct: f64,
    /// Zone label list
    pub zone: String,
}

/// Complete chart description
#[derive(Debug, Clone, Serialize)]
pub struct PlotDocument {
    /// Chart title
    pub title: String,
    /// When the document was built
    pub generated_at: DateTime<Utc>,
    /// Axis layout
    pub ternary: TernaryLayout,
    /// Reference zone outlines in classification order
    pub zones: Vec<ZoneTrace>,
    /// One marker per sample in input order
    pub markers: Vec<SampleMarker>,
    /// Table rows in input order
    pub table: Vec<TableRow>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reference zone traces, drawn as closed filled lines
pub fn zone_traces() -> Vec<ZoneTrace> {
    ZONE_POLYGONS
        .iter()
        .map(|polygon| ZoneTrace {
            name: polygon.zone.to_string(),
            a: polygon.a(),
            b: polygon.b(),
            c: polygon.c(),
            mode: "lines",
            fill: "toself",
        })
        .collect()
}

impl PlotDocument {
    /// Build a chart for the given samples
    pub fn new(title: impl Into<String>, samples: &[ClassifiedSample]) -> Self {
        Self::with_marker_size(title, samples, MARKER_SIZE)
    }

    /// Build a chart whose sample markers have the given size
    pub fn with_marker_size(
        title: impl Into<String>,
        samples: &[ClassifiedSample],
        marker_size: u32,
    ) -> Self {
        let markers = samples
            .iter()
            .map(|sample| SampleMarker {
                name: sample.legend_name(),
                point: TernaryPoint::from(&sample.ratios),
                mode: "markers",
                marker: MarkerStyle {
                    symbol: "circle",
                    size: marker_size,
                    color: sample.record.color.clone(),
                },
            })
            .collect();

        let table = samples
            .iter()
            .map(|sample| TableRow {
                fault_location: sample.record.fault_location.clone(),
                ch4_pct: round2(sample.ratios.ch4_pct),
                c2h4_pct: round2(sample.ratios.c2h4_pct),
                c2h2_pct: round2(sample.ratios.c2h2_pct),
                zone: sample.classification.to_string(),
            })
            .collect();

        Self {
            title: title.into(),
            generated_at: Utc::now(),
            ternary: TernaryLayout::default(),
            zones: zone_traces(),
            markers,
            table,
        }
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
