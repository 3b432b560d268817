//! Gas concentrations and their normalization into ternary percentages.
//!
//! The Duval triangle only looks at the *relative* amounts of methane (CH4),
//! ethylene (C2H4) and acetylene (C2H2). Raw concentrations in any consistent
//! unit (usually ppm) are converted into a percentage triple that sums to 100.

use serde::{Deserialize, Serialize};

/// Sum that a normalized triple adds up to when the source sum is positive.
pub const TERNARY_SUM: f64 = 100.0;

/// Raw dissolved gas concentrations for one oil sample.
///
/// Values are expected to be finite and non-negative. Negative inputs are not
/// rejected; they produce meaningless percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasSample {
    /// Methane concentration
    pub ch4: f64,
    /// Ethylene concentration
    pub c2h4: f64,
    /// Acetylene concentration
    pub c2h2: f64,
}

impl GasSample {
    /// Create a sample from CH4, C2H4 and C2H2 concentrations
    pub fn new(ch4: f64, c2h4: f64, c2h2: f64) -> Self {
        Self { ch4, c2h4, c2h2 }
    }

    /// Sum of the three concentrations
    pub fn total(&self) -> f64 {
        self.ch4 + self.c2h4 + self.c2h2
    }

    /// True when all three gases are absent (the degenerate sample)
    pub fn is_degenerate(&self) -> bool {
        self.total() == 0.0
    }

    /// Normalize this sample into ternary percentages
    pub fn normalize(&self) -> NormalizedRatios {
        normalize(self.ch4, self.c2h4, self.c2h2)
    }
}

/// Percentage shares of CH4, C2H4 and C2H2.
///
/// The components sum to 100 for a sample with a positive total, or are all
/// zero for the degenerate sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedRatios {
    /// CH4 share in percent
    pub ch4_pct: f64,
    /// C2H4 share in percent
    pub c2h4_pct: f64,
    /// C2H2 share in percent
    pub c2h2_pct: f64,
}

impl NormalizedRatios {
    /// Build a triple from already-normalized percentages
    pub fn new(ch4_pct: f64, c2h4_pct: f64, c2h2_pct: f64) -> Self {
        Self {
            ch4_pct,
            c2h4_pct,
            c2h2_pct,
        }
    }

    /// Sum of the three percentages (100 or 0)
    pub fn sum(&self) -> f64 {
        self.ch4_pct + self.c2h4_pct + self.c2h2_pct
    }

    /// Triple as a tuple in (CH4, C2H4, C2H2) order
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.ch4_pct, self.c2h4_pct, self.c2h2_pct)
    }
}

/// Convert raw gas concentrations into percentages of their total.
///
/// An all-zero input returns `(0, 0, 0)` instead of dividing by zero.
pub fn normalize(ch4: f64, c2h4: f64, c2h2: f64) -> NormalizedRatios {
    let total = ch4 + c2h4 + c2h2;
    if total == 0.0 {
        return NormalizedRatios::default();
    }

    NormalizedRatios {
        ch4_pct: TERNARY_SUM * ch4 / total,
        c2h4_pct: TERNARY_SUM * c2h4 / total,
        c2h2_pct: TERNARY_SUM * c2h2 / total,
    }
}
