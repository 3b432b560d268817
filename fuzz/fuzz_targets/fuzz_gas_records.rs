#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use duval::ingest::{ColumnMapping, GasRecordReader};
use duval::pipeline::classify_records;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either be rejected or classified, never panic
    let mapping = ColumnMapping::default();
    if let Ok(reader) = GasRecordReader::new(Cursor::new(data), &mapping, b',') {
        for result in classify_records(reader).take(1000) {
            if let Ok(sample) = result {
                let _ = sample.classification.to_string();
            }
        }
    }
});
