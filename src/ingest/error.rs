/// Errors that stop a gas record file from being read at all
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// I/O error reading the input file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error in the header
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// A gas column named in the mapping is absent from the header
    #[error("Missing required gas column: {0}")]
    MissingColumn(String),
}

/// Errors attached to a single record; the rest of the batch is unaffected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// A gas value is missing, empty, non-numeric or non-finite
    #[error("Invalid sample at row {row}: column '{field}' has value '{value}'")]
    InvalidSample {
        /// 1-based data row (header excluded)
        row: usize,
        /// Column name of the offending field
        field: String,
        /// Raw cell content
        value: String,
    },

    /// The row itself could not be split into fields
    #[error("Malformed record at row {row}: {message}")]
    MalformedRecord {
        /// 1-based data row (header excluded)
        row: usize,
        /// Parser message
        message: String,
    },
}

impl SampleError {
    /// Data row the error belongs to
    pub fn row(&self) -> usize {
        match self {
            SampleError::InvalidSample { row, .. } | SampleError::MalformedRecord { row, .. } => {
                *row
            }
        }
    }
}
