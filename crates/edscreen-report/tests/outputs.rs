//! Output files written for a finished run.

use std::fs;
use std::path::Path;

use edscreen_core::{RunContext, RunSource, screen};
use edscreen_model::{CellValue, SourceKind, SourceTable, Substance};
use edscreen_report::{LOG_FILE, MANIFEST_FILE, OutputFormat, write_outputs};
use edscreen_standards::default_layout;
use insta::assert_snapshot;
use tempfile::TempDir;

fn efsa_row(cas: &str) -> Vec<CellValue> {
    let mut row = vec![CellValue::Missing; 14];
    row[0] = CellValue::from(cas);
    row[7] = CellValue::from("Assessed");
    row[8] = CellValue::from("ED");
    row[9] = CellValue::from("not ED, pending");
    row
}

fn run() -> edscreen_core::ScreenResult {
    let sources = vec![
        RunSource::from_table(
            default_layout(SourceKind::EfsaPpp),
            SourceTable::new("efsa", vec![efsa_row("100-51-6")]),
        ),
        RunSource::absent(default_layout(SourceKind::Bpr), "no file configured"),
    ];
    let substances = vec![
        Substance::new(1, "100-51-6").unwrap(),
        Substance::new(2, "50-00-0").unwrap(),
    ];
    screen(&substances, RunContext::new(sources))
}

#[test]
fn csv_outputs_use_fixed_headers_and_placeholders() {
    let dir = TempDir::new().unwrap();
    let paths = write_outputs(&run(), Path::new("input.csv"), dir.path(), OutputFormat::Csv)
        .unwrap();
    assert!(paths.results_json.is_none());

    let summary = fs::read_to_string(paths.summary_csv.unwrap()).unwrap();
    assert_snapshot!(summary, @r#"
    id,Input,CAS,EC,Name,Hazard classification,ED status BPR/PPP,ED assessment,SVHC,CoRAP,PACT,Food
    1,100-51-6,100-51-6,-,-,-,"BPR: -; PPP: Yes (HH: ED; non-TO: not ED, pending)",-,-,-,-,-
    2,50-00-0,50-00-0,-,-,-,BPR: -; PPP: No,-,-,-,-,-
    "#);

    let results = fs::read_to_string(paths.results_csv.unwrap()).unwrap();
    let header = results.lines().next().unwrap();
    assert!(header.starts_with(
        "id,Input,CAS,EC,Name ECHA-CHEM,ECHA-CHEM checked,REACH tonnage band,On C&L?,"
    ));
    assert!(header.ends_with(
        "CoRAP: Yes/No,CoRAP: Initial grounds of Concern,CoRAP: Status,CoRAP: Latest update"
    ));
    assert_eq!(results.lines().count(), 3);
}

#[test]
fn json_outputs_keep_column_names() {
    let dir = TempDir::new().unwrap();
    let paths = write_outputs(&run(), Path::new("input.csv"), dir.path(), OutputFormat::Both)
        .unwrap();
    assert!(paths.results_csv.is_some());

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(paths.results_json.unwrap()).unwrap()).unwrap();
    assert_eq!(records[0]["ED PPP: Yes/No"], "Yes");
    assert_eq!(records[0]["BPR: Yes/No"], "-");
    assert_eq!(records[1]["ED PPP: Status"], "-");

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(paths.summary_json.unwrap()).unwrap()).unwrap();
    assert_eq!(summary[1]["ED status BPR/PPP"], "BPR: -; PPP: No");
}

#[test]
fn log_and_manifest_describe_the_run() {
    let dir = TempDir::new().unwrap();
    write_outputs(&run(), Path::new("input.csv"), dir.path(), OutputFormat::Csv).unwrap();

    let log = fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    // Two source outcomes, two substances, completion.
    assert_eq!(lines.len(), 5);
    assert!(lines[1].ends_with("BPR: not available (no file configured)"));
    assert!(lines[4].ends_with("run completed: 2 substances screened"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap())
            .unwrap();
    assert_eq!(manifest["substances"], 2);
    assert_eq!(manifest["input"], "input.csv");
    assert_eq!(manifest["sources"][0]["source"], "efsa-ppp");
    assert_eq!(manifest["sources"][0]["status"], "loaded");
    assert_eq!(manifest["sources"][0]["matches"], 1);
    assert_eq!(manifest["sources"][1]["status"], "absent");
    assert_eq!(manifest["sources"][1]["detail"], "no file configured");
}
