use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::ingest::SampleError;
use crate::pipeline::{BatchOutcome, ClassifiedSample};
use crate::zone::Zone;

/// Per-zone tally for a dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSummary {
    /// Dataset name shown in the header
    pub source: String,
    /// Samples per zone, indexed like [`Zone::ALL`]; a boundary sample counts
    /// towards every zone it matched
    pub zone_counts: [usize; 7],
    /// Samples that matched more than one zone
    pub ambiguous: usize,
    /// Samples that matched no zone
    pub unclassified: usize,
    /// Samples classified
    pub total: usize,
    /// Rejected rows kept for display
    pub invalid: Vec<SampleError>,
}

impl ZoneSummary {
    /// Tally classified samples
    pub fn from_samples(source: impl Into<String>, samples: &[ClassifiedSample]) -> Self {
        let mut summary = Self {
            source: source.into(),
            ..Default::default()
        };
        for sample in samples {
            summary.add(sample);
        }
        summary
    }

    /// Tally a batch outcome, including its rejected rows
    pub fn from_outcome(source: impl Into<String>, outcome: &BatchOutcome) -> Self {
        let mut summary = Self::from_samples(source, &outcome.classified);
        summary.invalid = outcome.invalid.clone();
        summary
    }

    /// Count one sample
    pub fn add(&mut self, sample: &ClassifiedSample) {
        self.total += 1;
        for zone in sample.classification.iter() {
            self.zone_counts[zone.index()] += 1;
        }
        if sample.classification.is_empty() {
            self.unclassified += 1;
        } else if sample.classification.is_ambiguous() {
            self.ambiguous += 1;
        }
    }

    /// Number of samples that matched a zone
    pub fn count(&self, zone: Zone) -> usize {
        self.zone_counts[zone.index()]
    }

    /// Check if any rows were rejected
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Duval Zone Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("==================").cyan()));
            output.push_str(&format!("{}: {}\n\n", style("Source").bold(), self.source));

            for zone in Zone::ALL {
                let count = self.count(zone);
                let count = if count > 0 {
                    style(count).green().bold()
                } else {
                    style(count).dim()
                };
                output.push_str(&format!(
                    "  {:<3} {:>5}  {}\n",
                    style(zone.as_str()).bold(),
                    count,
                    zone.description()
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} classified, {} on shared boundaries, {} unclassified, {} invalid\n",
                style("Summary").bold(),
                style(self.total).green(),
                style(self.ambiguous).yellow(),
                style(self.unclassified).yellow(),
                style(self.invalid.len()).red()
            ));

            for e in &self.invalid {
                output.push_str(&format!("  {} {}\n", style("INVALID").red().bold(), e));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ZoneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duval Zone Summary")?;
        writeln!(f, "==================")?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f)?;

        for zone in Zone::ALL {
            writeln!(
                f,
                "  {:<3} {:>5}  {}",
                zone.as_str(),
                self.count(zone),
                zone.description()
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} classified, {} on shared boundaries, {} unclassified, {} invalid",
            self.total,
            self.ambiguous,
            self.unclassified,
            self.invalid.len()
        )?;

        for e in &self.invalid {
            writeln!(f, "  INVALID {}", e)?;
        }

        Ok(())
    }
}
