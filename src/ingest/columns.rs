use serde::{Deserialize, Serialize};

use super::IngestError;

/// Marker color used when the input has no color column
pub const DEFAULT_COLOR: &str = "blue";

/// Header names of the columns read from a gas record file.
///
/// Matching against the file header is trimmed and case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    /// Methane concentration column
    pub ch4: String,
    /// Ethylene concentration column
    pub c2h4: String,
    /// Acetylene concentration column
    pub c2h2: String,
    /// Fault location label column (optional in the file)
    pub fault_location: String,
    /// Marker color column (optional in the file)
    pub color: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            ch4: "CH4_ppm".to_string(),
            c2h4: "C2H4_ppm".to_string(),
            c2h2: "C2H2_ppm".to_string(),
            fault_location: "Fault location".to_string(),
            color: "Color".to_string(),
        }
    }
}

/// Column positions resolved against a concrete header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ColumnIndices {
    pub ch4: usize,
    pub c2h4: usize,
    pub c2h2: usize,
    pub fault_location: Option<usize>,
    pub color: Option<usize>,
}

impl ColumnMapping {
    pub(super) fn resolve(&self, headers: &csv::StringRecord) -> Result<ColumnIndices, IngestError> {
        let find = |name: &str| {
            let wanted = name.trim().to_lowercase();
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase() == wanted)
        };
        let required =
            |name: &str| find(name).ok_or_else(|| IngestError::MissingColumn(name.to_string()));

        Ok(ColumnIndices {
            ch4: required(&self.ch4)?,
            c2h4: required(&self.c2h4)?,
            c2h2: required(&self.c2h2)?,
            fault_location: find(&self.fault_location),
            color: find(&self.color),
        })
    }
}
