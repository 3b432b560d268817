use super::*;
use std::io::Cursor;
use std::path::Path;

const SAMPLE_CSV: &str = "Fault location,CH4_ppm,C2H4_ppm,C2H2_ppm,Color
Tap changer,98,1,1,red
Main tank,50,30,20,
Bushing,abc,1,1,green
Cable box,0,0,0,black";

fn read(input: &str) -> Vec<Result<GasRecord, SampleError>> {
    GasRecordReader::new(Cursor::new(input), &ColumnMapping::default(), b',')
        .unwrap()
        .collect()
}

#[test]
fn test_reads_records_in_order() {
    let records = read(SAMPLE_CSV);
    assert_eq!(records.len(), 4);

    let first = records[0].as_ref().unwrap();
    assert_eq!(first.row, 1);
    assert_eq!(first.fault_location, "Tap changer");
    assert_eq!(first.color, "red");
    assert_eq!(first.sample.ch4, 98.0);
    assert_eq!(first.sample.c2h4, 1.0);
    assert_eq!(first.sample.c2h2, 1.0);

    let last = records[3].as_ref().unwrap();
    assert_eq!(last.row, 4);
    assert!(last.sample.is_degenerate());
}

#[test]
fn test_empty_color_cell_is_kept_empty() {
    let records = read(SAMPLE_CSV);
    assert_eq!(records[1].as_ref().unwrap().color, "");
}

#[test]
fn test_pass_through_fields_are_unmodified() {
    let input = "Fault location,CH4_ppm,C2H4_ppm,C2H2_ppm,Color\n  Main tank ,1,1,1,  \n";
    let records = read(input);
    let record = records[0].as_ref().unwrap();
    assert_eq!(record.fault_location, "  Main tank ");
    assert_eq!(record.color, "  ");
}

#[test]
fn test_defaults_apply_only_to_absent_columns() {
    let records = read("CH4_ppm,C2H4_ppm,C2H2_ppm\n1,1,1\n");
    let record = records[0].as_ref().unwrap();
    assert_eq!(record.fault_location, "");
    assert_eq!(record.color, DEFAULT_COLOR);

    // A short row leaves the trailing pass-through cells out entirely.
    let records = read("CH4_ppm,C2H4_ppm,C2H2_ppm,Fault location,Color\n1,1,1\n");
    let record = records[0].as_ref().unwrap();
    assert_eq!(record.fault_location, "");
    assert_eq!(record.color, DEFAULT_COLOR);
}

#[test]
fn test_invalid_sample_does_not_abort_batch() {
    let records = read(SAMPLE_CSV);
    let err = records[2].as_ref().unwrap_err();
    assert_eq!(
        err,
        &SampleError::InvalidSample {
            row: 3,
            field: "CH4_ppm".to_string(),
            value: "abc".to_string(),
        }
    );
    assert_eq!(err.row(), 3);
    assert!(records[3].is_ok());
}

#[test]
fn test_missing_and_non_finite_cells_are_invalid() {
    let input = "CH4_ppm,C2H4_ppm,C2H2_ppm
10,20
10,,5
10,NaN,5
10,inf,5
10,20,5";
    let records = read(input);
    assert_eq!(records.len(), 5);
    for (i, record) in records.iter().take(4).enumerate() {
        match record {
            Err(SampleError::InvalidSample { row, .. }) => assert_eq!(*row, i + 1),
            other => panic!("expected invalid sample, got {:?}", other),
        }
    }
    let ok = records[4].as_ref().unwrap();
    assert_eq!(ok.fault_location, "");
    assert_eq!(ok.color, DEFAULT_COLOR);
}

#[test]
fn test_missing_gas_column_fails_file() {
    let input = "CH4_ppm,C2H4_ppm\n1,2\n";
    let result = GasRecordReader::new(Cursor::new(input), &ColumnMapping::default(), b',');
    match result {
        Err(IngestError::MissingColumn(name)) => assert_eq!(name, "C2H2_ppm"),
        _ => panic!("expected missing column error"),
    }
}

#[test]
fn test_custom_mapping_and_tab_delimiter() {
    let input = "location\tmethane\tethylene\tacetylene\n LTC \t 5.5 \t2\t0\n";
    let mapping = ColumnMapping {
        ch4: "Methane".to_string(),
        c2h4: "ETHYLENE".to_string(),
        c2h2: "acetylene".to_string(),
        fault_location: "location".to_string(),
        color: "colour".to_string(),
    };
    let records: Vec<_> = GasRecordReader::new(Cursor::new(input), &mapping, b'\t')
        .unwrap()
        .collect();
    let record = records[0].as_ref().unwrap();
    assert_eq!(record.sample.ch4, 5.5);
    assert_eq!(record.fault_location, " LTC ");
    assert_eq!(record.color, DEFAULT_COLOR);
}

#[test]
fn test_delimiter_guess_from_extension() {
    let config = IngestConfig::default();
    assert_eq!(config.delimiter_for(Path::new("gas_data.tsv")), b'\t');
    assert_eq!(config.delimiter_for(Path::new("gas_data.TAB")), b'\t');
    assert_eq!(config.delimiter_for(Path::new("gas_data.csv")), b',');

    let config = IngestConfig {
        delimiter: Some(b';'),
        ..Default::default()
    };
    assert_eq!(config.delimiter_for(Path::new("gas_data.tsv")), b';');
}

#[test]
fn test_mapping_deserializes_partially() {
    let mapping: ColumnMapping = toml::from_str("ch4 = \"Methane\"").unwrap();
    assert_eq!(mapping.ch4, "Methane");
    assert_eq!(mapping.c2h4, "C2H4_ppm");
}
