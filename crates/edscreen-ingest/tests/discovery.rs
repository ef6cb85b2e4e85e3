//! Tests for source snapshot discovery.

use std::fs;
use std::path::{Path, PathBuf};

use edscreen_ingest::{classify_source_file, discover_source_files, list_source_files};
use edscreen_model::SourceKind;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "A,B\n1,2\n").expect("write file");
    path
}

#[test]
fn newest_snapshot_per_kind_wins() {
    let dir = tempfile::tempdir().expect("temp dir");
    let _ = touch(dir.path(), "PPP ED list 2025-01-30.xlsx");
    let newest = touch(dir.path(), "PPP ED list 2025-01-31.xlsx");
    let corap = touch(dir.path(), "CoRAP_2024.csv");
    let _ = touch(dir.path(), "notes.txt");

    let files = list_source_files(dir.path()).expect("list files");
    assert_eq!(files.len(), 3);

    let discovered = discover_source_files(&files);
    assert_eq!(discovered.get(&SourceKind::EfsaPpp), Some(&newest));
    assert_eq!(discovered.get(&SourceKind::Corap), Some(&corap));
    assert!(!discovered.contains_key(&SourceKind::Svhc));
}

#[test]
fn each_file_is_claimed_by_one_kind() {
    let dir = tempfile::tempdir().expect("temp dir");
    let assessment = touch(dir.path(), "BPR ED assessment.xlsx");
    let bpr = touch(dir.path(), "bpr_biocidal_actives.csv");

    let files = list_source_files(dir.path()).expect("list files");
    let discovered = discover_source_files(&files);
    assert_eq!(discovered.get(&SourceKind::EdAssessment), Some(&assessment));
    assert_eq!(discovered.get(&SourceKind::Bpr), Some(&bpr));
    assert_eq!(discovered.len(), 2);
}

#[test]
fn keywords_must_start_a_word() {
    assert_eq!(classify_source_file(Path::new("impact report.csv")), None);
    assert_eq!(
        classify_source_file(Path::new("PACT 2024-06.xlsx")),
        Some(SourceKind::Pact)
    );
    assert_eq!(
        classify_source_file(Path::new("EU_flavourings_list.csv")),
        Some(SourceKind::FoodFlavourings)
    );
    assert_eq!(classify_source_file(Path::new("notes.csv")), None);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("databases");
    assert!(list_source_files(&missing).is_err());
}
