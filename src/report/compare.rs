use std::fmt;

use super::ZoneSummary;
use crate::zone::Zone;

/// Side-by-side zone tallies of two datasets
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Left-hand dataset
    pub left: ZoneSummary,
    /// Right-hand dataset
    pub right: ZoneSummary,
}

impl Comparison {
    /// Pair two summaries
    pub fn new(left: ZoneSummary, right: ZoneSummary) -> Self {
        Self { left, right }
    }

    /// Zones whose counts differ between the two datasets
    pub fn differing_zones(&self) -> Vec<Zone> {
        Zone::ALL
            .iter()
            .copied()
            .filter(|zone| self.left.count(*zone) != self.right.count(*zone))
            .collect()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left_width = self.left.source.chars().count().max(8);
        let right_width = self.right.source.chars().count().max(8);

        writeln!(
            f,
            "{:<4}  {:>lw$}  {:>rw$}",
            "Zone",
            self.left.source,
            self.right.source,
            lw = left_width,
            rw = right_width
        )?;

        let mut line = |label: &str, left: usize, right: usize| {
            writeln!(
                f,
                "{:<4}  {:>lw$}  {:>rw$}",
                label,
                left,
                right,
                lw = left_width,
                rw = right_width
            )
        };

        for zone in Zone::ALL {
            line(zone.as_str(), self.left.count(zone), self.right.count(zone))?;
        }
        line("none", self.left.unclassified, self.right.unclassified)?;
        line("total", self.left.total, self.right.total)?;

        Ok(())
    }
}
