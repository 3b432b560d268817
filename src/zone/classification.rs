use std::fmt;

use serde::{Serialize, Serializer};

use super::Zone;

/// The set of zones a sample falls into.
///
/// Iteration and display always follow [`Zone::ALL`] order regardless of the
/// order zones were inserted. Displays as a space-separated label list, or
/// the empty string when no zone matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaultClassification {
    bits: u8,
}

impl FaultClassification {
    /// Classification with no matching zone
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a zone to the set
    pub fn insert(&mut self, zone: Zone) {
        self.bits |= 1 << zone.index();
    }

    /// Check whether the set includes a zone
    pub fn contains(&self, zone: Zone) -> bool {
        self.bits & (1 << zone.index()) != 0
    }

    /// True when the sample fell in no zone
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of matching zones
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when the sample lies on a boundary shared by several zones
    pub fn is_ambiguous(&self) -> bool {
        self.len() > 1
    }

    /// First matching zone in classification order
    pub fn primary(&self) -> Option<Zone> {
        self.iter().next()
    }

    /// Matching zones in classification order
    pub fn iter(&self) -> impl Iterator<Item = Zone> + '_ {
        Zone::ALL.iter().copied().filter(move |zone| self.contains(*zone))
    }

    /// Matching zones collected into a vector
    pub fn zones(&self) -> Vec<Zone> {
        self.iter().collect()
    }

    /// Space-separated label list, empty when nothing matched
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Zone> for FaultClassification {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        let mut classification = Self::empty();
        for zone in iter {
            classification.insert(zone);
        }
        classification
    }
}

impl fmt::Display for FaultClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, zone) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(zone.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for FaultClassification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
