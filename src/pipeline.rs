//! Record-by-record classification.
//!
//! Every record is normalized and classified independently of the others, so
//! the output sequence always lines up one-to-one with the input sequence.
//! Invalid records pass through as errors and never stop the batch.

use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::gas::{GasSample, NormalizedRatios};
use crate::ingest::{GasRecord, SampleError};
use crate::zone::{classify, FaultClassification};

/// A record together with its normalized ratios and matching zones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedSample {
    /// Input record, pass-through fields untouched
    pub record: GasRecord,
    /// Normalized percentages
    pub ratios: NormalizedRatios,
    /// Matching zones
    pub classification: FaultClassification,
}

impl ClassifiedSample {
    /// Legend name used for the plotted marker: `"<zones> - <fault location>"`
    pub fn legend_name(&self) -> String {
        format!("{} - {}", self.classification, self.record.fault_location)
    }
}

/// Normalize a sample and classify the result
pub fn classify_sample(sample: &GasSample) -> (NormalizedRatios, FaultClassification) {
    let ratios = sample.normalize();
    let classification = classify(&ratios);
    (ratios, classification)
}

/// Classify one record
pub fn classify_record(record: GasRecord) -> ClassifiedSample {
    let (ratios, classification) = classify_sample(&record.sample);
    ClassifiedSample {
        record,
        ratios,
        classification,
    }
}

/// Lazily classify a stream of records, preserving order
pub fn classify_records<I>(records: I) -> impl Iterator<Item = Result<ClassifiedSample, SampleError>>
where
    I: IntoIterator<Item = Result<GasRecord, SampleError>>,
{
    records.into_iter().map(|record| record.map(classify_record))
}

/// Classify an in-memory batch, preserving order
#[cfg(not(feature = "parallel"))]
pub fn classify_batch(
    records: Vec<Result<GasRecord, SampleError>>,
) -> Vec<Result<ClassifiedSample, SampleError>> {
    classify_records(records).collect()
}

/// Classify an in-memory batch across the rayon pool, preserving order
#[cfg(feature = "parallel")]
pub fn classify_batch(
    records: Vec<Result<GasRecord, SampleError>>,
) -> Vec<Result<ClassifiedSample, SampleError>> {
    use rayon::prelude::*;

    records
        .into_par_iter()
        .map(|record| record.map(classify_record))
        .collect()
}

/// What to do with records that failed to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidPolicy {
    /// Drop them silently
    Skip,
    /// Drop them from the output but list them in the summary
    #[default]
    Report,
    /// Treat the first one as fatal
    Fail,
}

impl fmt::Display for InvalidPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvalidPolicy::Skip => "skip",
            InvalidPolicy::Report => "report",
            InvalidPolicy::Fail => "fail",
        };
        f.write_str(name)
    }
}

/// Batch results split into classified samples and rejected rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Successfully classified samples in input order
    pub classified: Vec<ClassifiedSample>,
    /// Rejected rows in input order
    pub invalid: Vec<SampleError>,
}

impl BatchOutcome {
    /// Split a result sequence, keeping relative order within each half
    pub fn collect<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<ClassifiedSample, SampleError>>,
    {
        let mut outcome = Self::default();
        for result in results {
            match result {
                Ok(sample) => outcome.classified.push(sample),
                Err(e) => outcome.invalid.push(e),
            }
        }
        info!(
            "Classified {} samples ({} invalid)",
            outcome.classified.len(),
            outcome.invalid.len()
        );
        outcome
    }

    /// Apply an invalid-record policy.
    ///
    /// `Fail` returns the first rejected row as an error; `Skip` forgets the
    /// rejected rows; `Report` keeps them for the caller to show.
    pub fn apply_policy(mut self, policy: InvalidPolicy) -> Result<Self, SampleError> {
        match policy {
            InvalidPolicy::Fail => {
                if !self.invalid.is_empty() {
                    return Err(self.invalid.swap_remove(0));
                }
            }
            InvalidPolicy::Skip => {
                if !self.invalid.is_empty() {
                    warn!("Skipping {} invalid records", self.invalid.len());
                }
                self.invalid.clear();
            }
            InvalidPolicy::Report => {
                for e in &self.invalid {
                    warn!("{}", e);
                }
            }
        }
        Ok(self)
    }

    /// Total rows seen
    pub fn total(&self) -> usize {
        self.classified.len() + self.invalid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    fn record(row: usize, ch4: f64, c2h4: f64, c2h2: f64) -> Result<GasRecord, SampleError> {
        Ok(GasRecord::new(row, GasSample::new(ch4, c2h4, c2h2), format!("loc{}", row)))
    }

    fn invalid(row: usize) -> Result<GasRecord, SampleError> {
        Err(SampleError::InvalidSample {
            row,
            field: "CH4_ppm".to_string(),
            value: "n/a".to_string(),
        })
    }

    fn batch() -> Vec<Result<GasRecord, SampleError>> {
        vec![
            record(1, 99.0, 0.5, 0.5),
            invalid(2),
            record(3, 900.0, 80.0, 20.0),
            record(4, 0.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_classify_sample() {
        let (ratios, classification) = classify_sample(&GasSample::new(198.0, 1.0, 1.0));
        assert!((ratios.ch4_pct - 99.0).abs() < 1e-12);
        assert_eq!(classification.to_string(), "PD");
    }

    #[test]
    fn test_stream_preserves_order_and_errors() {
        let results: Vec<_> = classify_records(batch()).collect();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().classification.to_string(), "PD");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().classification.to_string(), "T1");
        assert!(results[3].as_ref().unwrap().classification.is_empty());
        assert_eq!(results[2].as_ref().unwrap().record.fault_location, "loc3");
    }

    #[test]
    fn test_batch_matches_stream() {
        let streamed: Vec<_> = classify_records(batch()).collect();
        assert_eq!(classify_batch(batch()), streamed);
    }

    #[test]
    fn test_outcome_and_policies() {
        let outcome = BatchOutcome::collect(classify_batch(batch()));
        assert_eq!(outcome.classified.len(), 3);
        assert_eq!(outcome.invalid.len(), 1);
        assert_eq!(outcome.total(), 4);

        let reported = outcome.clone().apply_policy(InvalidPolicy::Report).unwrap();
        assert_eq!(reported.invalid.len(), 1);

        let skipped = outcome.clone().apply_policy(InvalidPolicy::Skip).unwrap();
        assert!(skipped.invalid.is_empty());
        assert_eq!(skipped.classified.len(), 3);

        let failed = outcome.apply_policy(InvalidPolicy::Fail).unwrap_err();
        assert_eq!(failed.row(), 2);
    }

    #[test]
    fn test_legend_name() {
        let sample = classify_record(GasRecord::new(
            1,
            GasSample::new(78.0, 20.0, 2.0),
            "Main tank",
        ));
        assert!(sample.classification.contains(Zone::T1));
        assert_eq!(sample.legend_name(), "T1 T2 - Main tank");
    }

    #[test]
    fn test_policy_names() {
        for policy in [InvalidPolicy::Skip, InvalidPolicy::Report, InvalidPolicy::Fail] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy));
            assert_eq!(serde_json::from_str::<InvalidPolicy>(&json).unwrap(), policy);
        }
        assert!(serde_json::from_str::<InvalidPolicy>("\"drop\"").is_err());
        assert_eq!(InvalidPolicy::default().to_string(), "report");
    }
}
