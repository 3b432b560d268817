//! Integration tests for duval
//!
//! These tests run the full pipeline from a gas record file on disk to the
//! reports built from it.

use duval::ingest::{load_records, ColumnMapping, GasRecordReader, IngestConfig, IngestError};
use duval::pipeline::{classify_batch, classify_records, BatchOutcome, InvalidPolicy};
use duval::report::{render_table, write_csv, PlotDocument, ZoneSummary, DEFAULT_TITLE};
use duval::zone::Zone;
use std::fs;
use tempfile::tempdir;

const GAS_DATA: &str = "Fault location,CH4_ppm,C2H4_ppm,C2H2_ppm,Color
Tap changer,198,1,1,red
Main tank,900,80,20,blue
Selector,,12,4,green
Bushing,30,30,40,orange
Cooler,0,0,0,gray
Core,780,200,20,purple
";

/// Test the complete read-classify-report cycle
#[test]
fn test_file_to_report_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gas_data.csv");
    fs::write(&path, GAS_DATA).unwrap();

    let reader = GasRecordReader::open(&path, &IngestConfig::default()).unwrap();
    let outcome = BatchOutcome::collect(classify_records(reader));

    assert_eq!(outcome.total(), 6);
    assert_eq!(outcome.classified.len(), 5);
    assert_eq!(outcome.invalid.len(), 1);
    assert_eq!(outcome.invalid[0].row(), 3);

    let zones: Vec<String> = outcome
        .classified
        .iter()
        .map(|s| s.classification.to_string())
        .collect();
    assert_eq!(zones, vec!["PD", "T1", "D2", "", "T1 T2"]);

    let locations: Vec<&str> = outcome
        .classified
        .iter()
        .map(|s| s.record.fault_location.as_str())
        .collect();
    assert_eq!(locations, vec!["Tap changer", "Main tank", "Bushing", "Cooler", "Core"]);
    assert_eq!(outcome.classified[3].record.color, "gray");

    let summary = ZoneSummary::from_outcome("gas_data", &outcome);
    assert_eq!(summary.count(Zone::T1), 2);
    assert_eq!(summary.count(Zone::T2), 1);
    assert_eq!(summary.unclassified, 1);
    assert_eq!(summary.ambiguous, 1);
    assert!(summary.has_invalid());

    let table = render_table(&outcome.classified);
    assert_eq!(table.lines().count(), 7);
}

/// Parallel and sequential batch paths give identical, ordered results
#[test]
fn test_batch_preserves_input_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("many.csv");

    let mut content = String::from("CH4_ppm,C2H4_ppm,C2H2_ppm,Fault location\n");
    for i in 0..500 {
        content.push_str(&format!("{},{},{},unit{}\n", i % 97, (i * 7) % 53, (i * 3) % 31, i));
    }
    fs::write(&path, content).unwrap();

    let records = load_records(&path, &IngestConfig::default()).unwrap();
    let streamed: Vec<_> = classify_records(records.clone()).collect();
    let batched = classify_batch(records);
    assert_eq!(batched, streamed);

    for (i, result) in batched.iter().enumerate() {
        let sample = result.as_ref().unwrap();
        assert_eq!(sample.record.row, i + 1);
        assert_eq!(sample.record.fault_location, format!("unit{}", i));
    }
}

#[test]
fn test_fail_policy_surfaces_first_invalid_row() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gas_data.csv");
    fs::write(&path, GAS_DATA).unwrap();

    let records = load_records(&path, &IngestConfig::default()).unwrap();
    let outcome = BatchOutcome::collect(classify_batch(records));
    let err = outcome.apply_policy(InvalidPolicy::Fail).unwrap_err();
    assert_eq!(err.row(), 3);
    assert!(err.to_string().contains("CH4_ppm"));
}

#[test]
fn test_tsv_with_custom_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lab_export.tsv");
    fs::write(
        &path,
        "Sample\tMethane (ppm)\tEthylene (ppm)\tAcetylene (ppm)\n\
         T401-A\t12\t70\t3\n",
    )
    .unwrap();

    let config = IngestConfig {
        columns: ColumnMapping {
            ch4: "Methane (ppm)".to_string(),
            c2h4: "Ethylene (ppm)".to_string(),
            c2h2: "Acetylene (ppm)".to_string(),
            fault_location: "Sample".to_string(),
            ..Default::default()
        },
        delimiter: None,
    };

    let records = load_records(&path, &config).unwrap();
    let outcome = BatchOutcome::collect(classify_batch(records));
    let sample = &outcome.classified[0];
    assert_eq!(sample.record.fault_location, "T401-A");
    assert_eq!(sample.classification.to_string(), "T3");
}

#[test]
fn test_missing_file_and_missing_column() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        load_records(&missing, &IngestConfig::default()),
        Err(IngestError::IoError(_))
    ));

    let path = dir.path().join("partial.csv");
    fs::write(&path, "CH4_ppm,C2H2_ppm\n1,2\n").unwrap();
    match load_records(&path, &IngestConfig::default()) {
        Err(IngestError::MissingColumn(name)) => assert_eq!(name, "C2H4_ppm"),
        other => panic!("expected missing column, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_exports() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gas_data.csv");
    fs::write(&path, GAS_DATA).unwrap();

    let records = load_records(&path, &IngestConfig::default()).unwrap();
    let outcome = BatchOutcome::collect(classify_batch(records));

    let csv_path = dir.path().join("classified.csv");
    write_csv(&outcome.classified, fs::File::create(&csv_path).unwrap()).unwrap();
    let written = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(written.lines().count(), 6);
    assert!(written.lines().nth(1).unwrap().starts_with("Tap changer,198,1,1,red,99,"));

    let doc = PlotDocument::new(DEFAULT_TITLE, &outcome.classified);
    let json: serde_json::Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["markers"].as_array().unwrap().len(), 5);
    assert_eq!(json["markers"][0]["name"], "PD - Tap changer");
    assert_eq!(json["markers"][0]["point"]["a"], 99.0);
    assert_eq!(json["zones"].as_array().unwrap().len(), 7);
}
