//! Reference boundary polygons of the Duval triangle.
//!
//! These are fixed published coordinates used by renderers to draw the zone
//! regions; nothing here is computed. Vertices are in ternary coordinates with
//! the axes arranged as plotted:
//!
//! | Axis | Gas | Title |
//! |------|-----|-------|
//! | a | CH4 | `CH4%` |
//! | b | C2H2 | `C2H2%` |
//! | c | C2H4 | `C2H4%` |
//!
//! The polygons outline the drawn regions only. Classification is done by the
//! predicates in [`crate::zone`], which do not always agree with the drawn
//! outlines along shared edges.

use serde::Serialize;

use crate::gas::{NormalizedRatios, TERNARY_SUM};
use crate::zone::Zone;

/// A point on the ternary diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TernaryPoint {
    /// CH4 percentage (a axis)
    pub a: f64,
    /// C2H2 percentage (b axis)
    pub b: f64,
    /// C2H4 percentage (c axis)
    pub c: f64,
}

impl TernaryPoint {
    /// Create a point from (CH4, C2H2, C2H4) axis values
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Sum of the three axis values
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }
}

impl From<&NormalizedRatios> for TernaryPoint {
    fn from(ratios: &NormalizedRatios) -> Self {
        Self::new(ratios.ch4_pct, ratios.c2h2_pct, ratios.c2h4_pct)
    }
}

/// Axis description for a ternary renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TernaryAxis {
    /// Axis title
    pub title: &'static str,
    /// Gas the axis measures
    pub gas: &'static str,
}

/// Axes in (a, b, c) order
pub const AXES: [TernaryAxis; 3] = [
    TernaryAxis {
        title: "CH4%",
        gas: "CH4",
    },
    TernaryAxis {
        title: "C2H2%",
        gas: "C2H2",
    },
    TernaryAxis {
        title: "C2H4%",
        gas: "C2H4",
    },
];

/// Constant that every plotted point sums to
pub const AXIS_SUM: f64 = TERNARY_SUM;

/// Outline of one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZonePolygon {
    /// Zone the outline belongs to
    pub zone: Zone,
    /// Vertices in drawing order; the renderer closes the path
    pub vertices: &'static [TernaryPoint],
}

impl ZonePolygon {
    /// Values along the a (CH4) axis
    pub fn a(&self) -> Vec<f64> {
        self.vertices.iter().map(|p| p.a).collect()
    }

    /// Values along the b (C2H2) axis
    pub fn b(&self) -> Vec<f64> {
        self.vertices.iter().map(|p| p.b).collect()
    }

    /// Values along the c (C2H4) axis
    pub fn c(&self) -> Vec<f64> {
        self.vertices.iter().map(|p| p.c).collect()
    }
}

const fn p(a: f64, b: f64, c: f64) -> TernaryPoint {
    TernaryPoint::new(a, b, c)
}

const PD_VERTICES: [TernaryPoint; 3] = [p(98.0, 0.0, 2.0), p(1.0, 0.0, 0.0), p(98.0, 2.0, 0.0)];

const D1_VERTICES: [TernaryPoint; 4] = [
    p(0.0, 1.0, 0.0),
    p(0.0, 77.0, 23.0),
    p(64.0, 13.0, 23.0),
    p(87.0, 13.0, 0.0),
];

const D2_VERTICES: [TernaryPoint; 5] = [
    p(0.0, 77.0, 23.0),
    p(0.0, 29.0, 71.0),
    p(31.0, 29.0, 40.0),
    p(47.0, 13.0, 40.0),
    p(64.0, 13.0, 23.0),
];

const DT_VERTICES: [TernaryPoint; 8] = [
    p(0.0, 29.0, 71.0),
    p(0.0, 15.0, 85.0),
    p(35.0, 15.0, 50.0),
    p(46.0, 4.0, 50.0),
    p(96.0, 4.0, 0.0),
    p(87.0, 13.0, 0.0),
    p(47.0, 13.0, 40.0),
    p(31.0, 29.0, 40.0),
];

const T1_VERTICES: [TernaryPoint; 5] = [
    p(76.0, 4.0, 20.0),
    p(80.0, 0.0, 20.0),
    p(98.0, 0.0, 2.0),
    p(98.0, 2.0, 0.0),
    p(96.0, 4.0, 0.0),
];

const T2_VERTICES: [TernaryPoint; 4] = [
    p(46.0, 4.0, 50.0),
    p(50.0, 0.0, 50.0),
    p(80.0, 0.0, 20.0),
    p(76.0, 4.0, 20.0),
];

const T3_VERTICES: [TernaryPoint; 4] = [
    p(0.0, 15.0, 85.0),
    p(0.0, 0.0, 1.0),
    p(50.0, 0.0, 50.0),
    p(35.0, 15.0, 50.0),
];

/// Zone outlines in [`Zone::ALL`] order
pub static ZONE_POLYGONS: [ZonePolygon; 7] = [
    ZonePolygon {
        zone: Zone::PD,
        vertices: &PD_VERTICES,
    },
    ZonePolygon {
        zone: Zone::D1,
        vertices: &D1_VERTICES,
    },
    ZonePolygon {
        zone: Zone::D2,
        vertices: &D2_VERTICES,
    },
    ZonePolygon {
        zone: Zone::DT,
        vertices: &DT_VERTICES,
    },
    ZonePolygon {
        zone: Zone::T1,
        vertices: &T1_VERTICES,
    },
    ZonePolygon {
        zone: Zone::T2,
        vertices: &T2_VERTICES,
    },
    ZonePolygon {
        zone: Zone::T3,
        vertices: &T3_VERTICES,
    },
];

/// Look up the outline of a zone
pub fn zone_polygon(zone: Zone) -> &'static ZonePolygon {
    &ZONE_POLYGONS[zone.index()]
}
