//! # Duval Triangle 1 Fault Zones
//!
//! Each zone of the triangle is an independent predicate over the normalized
//! (CH4%, C2H4%, C2H2%) triple. The predicates are evaluated against the
//! published boundary thresholds with inclusive comparisons, so a point lying
//! on a shared boundary can match two zones at once. The classifier reports
//! every zone whose inequality holds rather than forcing a single label.
//!
//! | Zone | Fault type |
//! |------|------------|
//! | PD | Partial discharges |
//! | D1 | Discharges of low energy |
//! | D2 | Discharges of high energy |
//! | DT | Mixture of thermal and electrical faults |
//! | T1 | Thermal fault, t < 300 °C |
//! | T2 | Thermal fault, 300 °C < t < 700 °C |
//! | T3 | Thermal fault, t > 700 °C |

mod classification;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::gas::NormalizedRatios;

pub use classification::FaultClassification;

/// A named region of the Duval triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    /// Partial discharges
    PD,
    /// Discharges of low energy
    D1,
    /// Discharges of high energy
    D2,
    /// Thermal and electrical faults
    DT,
    /// Thermal fault below 300 °C
    T1,
    /// Thermal fault between 300 °C and 700 °C
    T2,
    /// Thermal fault above 700 °C
    T3,
}

impl Zone {
    /// All zones in classification order
    pub const ALL: [Zone; 7] = [
        Zone::PD,
        Zone::D1,
        Zone::D2,
        Zone::DT,
        Zone::T1,
        Zone::T2,
        Zone::T3,
    ];

    /// Short label as used on the triangle
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::PD => "PD",
            Zone::D1 => "D1",
            Zone::D2 => "D2",
            Zone::DT => "DT",
            Zone::T1 => "T1",
            Zone::T2 => "T2",
            Zone::T3 => "T3",
        }
    }

    /// Fault type associated with the zone
    pub fn description(&self) -> &'static str {
        match self {
            Zone::PD => "Partial discharges",
            Zone::D1 => "Discharges of low energy",
            Zone::D2 => "Discharges of high energy",
            Zone::DT => "Thermal and electrical faults",
            Zone::T1 => "Thermal fault, t < 300 °C",
            Zone::T2 => "Thermal fault, 300 °C < t < 700 °C",
            Zone::T3 => "Thermal fault, t > 700 °C",
        }
    }

    /// Position of the zone in [`Zone::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Check whether a normalized triple falls inside this zone
    pub fn contains(&self, ratios: &NormalizedRatios) -> bool {
        let (ch4, c2h4, c2h2) = ratios.as_tuple();
        match self {
            Zone::PD => is_pd(ch4, c2h4, c2h2),
            Zone::D1 => is_d1(ch4, c2h4, c2h2),
            Zone::D2 => is_d2(ch4, c2h4, c2h2),
            Zone::DT => is_dt(ch4, c2h4, c2h2),
            Zone::T1 => is_t1(ch4, c2h4, c2h2),
            Zone::T2 => is_t2(ch4, c2h4, c2h2),
            Zone::T3 => is_t3(ch4, c2h4, c2h2),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown zone label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown Duval zone: {0}")]
pub struct ParseZoneError(pub String);

impl FromStr for Zone {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Zone::ALL
            .iter()
            .copied()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseZoneError(label.to_string()))
    }
}

fn is_pd(ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    ch4 >= 98.0 && c2h4 <= 2.0 && c2h2 <= 2.0
}

fn is_d1(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h2 >= 13.0 && c2h4 <= 23.0
}

fn is_d2(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (c2h4 >= 23.0 && c2h2 >= 29.0)
        || ((23.0..=40.0).contains(&c2h4) && (13.0..=29.0).contains(&c2h2))
}

// The first clause has no upper C2H4 bound; kept as published.
fn is_dt(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (c2h4 >= 40.0 && (15.0..=29.0).contains(&c2h2))
        || ((40.0..=50.0).contains(&c2h4) && (13.0..=15.0).contains(&c2h2))
        || (c2h4 <= 50.0 && (4.0..=13.0).contains(&c2h2))
}

fn is_t1(ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (76.0..=98.0).contains(&ch4) && c2h2 <= 4.0 && c2h4 <= 20.0
}

fn is_t2(ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (46.0..=80.0).contains(&ch4) && (20.0..=50.0).contains(&c2h4) && c2h2 <= 4.0
}

fn is_t3(ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    ch4 <= 50.0 && c2h2 <= 15.0 && c2h4 >= 50.0
}

/// Evaluate every zone predicate against a normalized triple.
///
/// Matches are collected in [`Zone::ALL`] order. An empty result means the
/// point falls in a gap between the published regions.
pub fn classify(ratios: &NormalizedRatios) -> FaultClassification {
    Zone::ALL
        .iter()
        .copied()
        .filter(|zone| zone.contains(ratios))
        .collect()
}

/// Convenience wrapper over [`classify`] for raw percentages
pub fn classify_percentages(ch4_pct: f64, c2h4_pct: f64, c2h2_pct: f64) -> FaultClassification {
    classify(&NormalizedRatios::new(ch4_pct, c2h4_pct, c2h2_pct))
}
