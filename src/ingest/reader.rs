use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use super::columns::{ColumnIndices, ColumnMapping, DEFAULT_COLOR};
use super::{IngestError, SampleError};
use crate::gas::GasSample;

/// One row of a gas record file.
///
/// `fault_location` and `color` are carried through to the output untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasRecord {
    /// 1-based data row (header excluded)
    pub row: usize,
    /// Gas concentrations
    pub sample: GasSample,
    /// Where the sample was taken or the suspected fault location
    pub fault_location: String,
    /// Display color for the plotted marker
    pub color: String,
}

impl GasRecord {
    /// Create a record with the default marker color
    pub fn new(row: usize, sample: GasSample, fault_location: impl Into<String>) -> Self {
        Self {
            row,
            sample,
            fault_location: fault_location.into(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Replace the marker color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Settings for reading a gas record file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestConfig {
    /// Header names to look for
    pub columns: ColumnMapping,
    /// Field delimiter; guessed from the file extension when `None`
    pub delimiter: Option<u8>,
}

impl IngestConfig {
    /// Delimiter to use for a given path: explicit setting, else tab for
    /// `.tsv`/`.tab` files, else comma
    pub fn delimiter_for(&self, path: &Path) -> u8 {
        if let Some(delimiter) = self.delimiter {
            return delimiter;
        }
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("tsv") | Some("tab") => b'\t',
            _ => b',',
        }
    }
}

/// Streaming reader over the rows of a gas record file.
///
/// The header is checked up front; a missing gas column fails the whole file.
/// After that every row yields its own `Result`, so one bad row never stops
/// the rows after it.
pub struct GasRecordReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    columns: ColumnIndices,
    mapping: ColumnMapping,
    row: usize,
}

impl GasRecordReader<BufReader<File>> {
    /// Open a CSV/TSV file
    pub fn open<P: AsRef<Path>>(path: P, config: &IngestConfig) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let delimiter = config.delimiter_for(path);
        info!("Reading gas records from {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file), &config.columns, delimiter)
    }
}

impl<R: Read> GasRecordReader<R> {
    /// Wrap any reader producing delimited text with a header row
    pub fn new(reader: R, mapping: &ColumnMapping, delimiter: u8) -> Result<Self, IngestError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = mapping.resolve(&headers)?;
        debug!("Resolved gas columns: {:?}", columns);

        Ok(Self {
            records: csv_reader.into_records(),
            columns,
            mapping: mapping.clone(),
            row: 0,
        })
    }

    fn parse_record(&self, record: &csv::StringRecord) -> Result<GasRecord, SampleError> {
        let gas = |index: usize, field: &str| -> Result<f64, SampleError> {
            let raw = record.get(index).unwrap_or("");
            let invalid = || SampleError::InvalidSample {
                row: self.row,
                field: field.to_string(),
                value: raw.to_string(),
            };
            let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(invalid())
            }
        };

        let sample = GasSample::new(
            gas(self.columns.ch4, &self.mapping.ch4)?,
            gas(self.columns.c2h4, &self.mapping.c2h4)?,
            gas(self.columns.c2h2, &self.mapping.c2h2)?,
        );

        // Pass-through cells are kept verbatim; defaults only fill in for a
        // column the header lacks or a cell a short row leaves out.
        let text = |index: Option<usize>| index.and_then(|i| record.get(i)).map(str::to_string);

        Ok(GasRecord {
            row: self.row,
            sample,
            fault_location: text(self.columns.fault_location).unwrap_or_default(),
            color: text(self.columns.color).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        })
    }
}

impl<R: Read> Iterator for GasRecordReader<R> {
    type Item = Result<GasRecord, SampleError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.row += 1;

        let result = match record {
            Ok(record) => self.parse_record(&record),
            Err(e) => Err(SampleError::MalformedRecord {
                row: self.row,
                message: e.to_string(),
            }),
        };

        if let Err(e) = &result {
            debug!("{}", e);
        }
        Some(result)
    }
}

/// Read every row of a file into memory, keeping per-row errors
pub fn load_records<P: AsRef<Path>>(
    path: P,
    config: &IngestConfig,
) -> Result<Vec<Result<GasRecord, SampleError>>, IngestError> {
    Ok(GasRecordReader::open(path, config)?.collect())
}
