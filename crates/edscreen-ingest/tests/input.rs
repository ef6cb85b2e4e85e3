//! Tests for substance list ingestion.

use std::io::Write;

use edscreen_ingest::{IngestError, read_substances, substances_from_table};
use edscreen_model::{CellValue, FieldValue, SourceTable};
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn reads_and_normalizes_cas_column() {
    let file = csv_file("Name,CAS\nbenzyl alcohol, 100-51-6 \nformaldehyde,CAS 50-00-0\n");
    let substances = read_substances(file.path()).expect("read substances");
    assert_eq!(substances.len(), 2);
    assert_eq!(substances[0].id, 1);
    assert_eq!(substances[0].input_identifier, "100-51-6");
    assert_eq!(substances[0].cas, FieldValue::new("100-51-6"));
    assert_eq!(substances[1].input_identifier, "50-00-0");
    assert_eq!(substances[1].ec, FieldValue::Unset);
}

#[test]
fn drops_empty_and_unusable_rows_before_assigning_ids() {
    let file = csv_file("CAS\n100-51-6\n\nn/a\n50-00-0\n");
    let substances = read_substances(file.path()).expect("read substances");
    let ids: Vec<(usize, &str)> = substances
        .iter()
        .map(|s| (s.id, s.input_identifier.as_str()))
        .collect();
    assert_eq!(ids, vec![(1, "100-51-6"), (2, "50-00-0")]);
}

#[test]
fn optional_ec_column_seeds_substance_ec() {
    let file = csv_file("CAS,EC\n100-51-6,202-859-9\n50-00-0,\n");
    let substances = read_substances(file.path()).expect("read substances");
    assert_eq!(substances[0].ec, FieldValue::new("202-859-9"));
    assert_eq!(substances[1].ec, FieldValue::Unset);
}

#[test]
fn missing_cas_column_names_the_column() {
    let file = csv_file("Name,CAS number\nbenzyl alcohol,100-51-6\n");
    let error = read_substances(file.path()).expect_err("missing CAS must fail");
    match error {
        IngestError::MissingColumn { column, path } => {
            assert_eq!(column, "CAS");
            assert_eq!(path, file.path());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn numeric_cells_are_stringified_without_fraction() {
    let table = SourceTable::new(
        "input",
        vec![
            vec![CellValue::from("CAS")],
            vec![CellValue::Float(50000.0)],
            vec![CellValue::Missing],
        ],
    );
    let substances = substances_from_table(&table).expect("ingest");
    assert_eq!(substances.len(), 1);
    assert_eq!(substances[0].input_identifier, "50000");
}

#[test]
fn unsupported_extension_is_rejected() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("create temp file");
    writeln!(file, "CAS").unwrap();
    let error = read_substances(file.path()).expect_err("txt is not tabular");
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}
