//! Tests for the first-match scan and row projection.

use edscreen_map::{CandidateKeys, MatchOutcome, Matcher, cell_matches, find_first_match};
use edscreen_model::{CellValue, ColumnRef, FieldValue, SourceKind, SourceTable};
use edscreen_standards::{CandidateKey, KeyColumns, MatchRule, default_layout};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn row(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|value| {
            if value.is_empty() {
                CellValue::Missing
            } else {
                text(value)
            }
        })
        .collect()
}

fn col(letters: &str) -> ColumnRef {
    letters.parse().expect("column letters")
}

fn keys(cas: &str) -> CandidateKeys {
    CandidateKeys::new(Some(cas), None, Some(cas))
}

/// An EFSA-shaped sheet: CAS in A, status H, conclusions I and J, link N.
fn efsa_table(rows: Vec<Vec<CellValue>>) -> SourceTable {
    SourceTable::new("efsa", rows)
}

fn efsa_row(cas: &str, status: &str) -> Vec<CellValue> {
    row(&[
        cas, "name", "", "", "", "", "", status, "hh", "non-to", "", "", "", "link",
    ])
}

#[test]
fn projects_from_matched_row() {
    let table = efsa_table(vec![
        row(&["CAS", "Name"]),
        efsa_row("50-00-0", "Pending"),
        efsa_row("100-51-6", "Assessed"),
    ]);
    let layout = default_layout(SourceKind::EfsaPpp);

    let MatchOutcome::Matched(found) = find_first_match(&table, &keys("100-51-6"), &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.row, 2);
    assert_eq!(found.column, col("A"));
    assert_eq!(
        found.values,
        vec![
            FieldValue::new("Assessed"),
            FieldValue::new("hh"),
            FieldValue::new("non-to"),
            FieldValue::new("link"),
        ]
    );
}

#[test]
fn repeated_lookups_are_identical() {
    let table = efsa_table(vec![efsa_row("100-51-6", "Assessed")]);
    let layout = default_layout(SourceKind::EfsaPpp);
    let matcher = Matcher::new(&layout);
    let first = matcher.find(&table, &keys("100-51-6"));
    let second = matcher.find(&table, &keys("100-51-6"));
    assert!(first.is_match());
    assert_eq!(first, second);
}

#[test]
fn first_row_in_scan_order_wins() {
    let table = efsa_table(vec![
        row(&["x", "y"]),
        // The key sits in column B here, before the row further down that
        // has it in column A.
        efsa_row("other", "First"),
        efsa_row("100-51-6", "Second"),
    ]);
    let mut rows: Vec<Vec<CellValue>> = table.rows().map(|(_, cells)| cells.to_vec()).collect();
    rows[1][1] = text("100-51-6");
    let table = efsa_table(rows);
    let layout = default_layout(SourceKind::EfsaPpp);

    let MatchOutcome::Matched(found) = find_first_match(&table, &keys("100-51-6"), &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.row, 1);
    assert_eq!(found.column, col("B"));
    assert_eq!(found.values[0], FieldValue::new("First"));
}

#[test]
fn leftmost_cell_wins_within_a_row() {
    let table = SourceTable::new(
        "two keys",
        vec![row(&["", "202-859-9", "100-51-6"])],
    );
    let layout = default_layout(SourceKind::Bpr);
    let keys = CandidateKeys::new(Some("100-51-6"), Some("202-859-9"), Some("100-51-6"));
    let MatchOutcome::Matched(found) = find_first_match(&table, &keys, &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.column, col("B"));
}

#[test]
fn no_match_is_explicit() {
    let table = efsa_table(vec![efsa_row("100-51-6", "Assessed")]);
    let layout = default_layout(SourceKind::EfsaPpp);
    assert_eq!(
        find_first_match(&table, &keys("999-99-9"), &layout),
        MatchOutcome::NoMatch
    );
}

#[test]
fn placeholder_cells_never_match() {
    let table = efsa_table(vec![efsa_row("-", "Wrong"), efsa_row(" - ", "Wrong")]);
    let layout = default_layout(SourceKind::EfsaPpp);
    // A sentinel key is dropped before matching.
    let keys = CandidateKeys::new(Some("-"), Some("-"), Some("-"));
    assert!(keys.is_empty());
    assert_eq!(find_first_match(&table, &keys, &layout), MatchOutcome::NoMatch);
    assert!(!cell_matches("-", &keys, &[MatchRule::Exact]));
}

#[test]
fn match_is_exact_after_trimming() {
    let table = efsa_table(vec![
        efsa_row("100-51-60", "Longer"),
        efsa_row("  100-51-6  ", "Trimmed"),
    ]);
    let layout = default_layout(SourceKind::EfsaPpp);
    let MatchOutcome::Matched(found) = find_first_match(&table, &keys("100-51-6"), &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.values[0], FieldValue::new("Trimmed"));
}

#[test]
fn numeric_cells_match_their_integer_text() {
    let table = SourceTable::new(
        "flavourings",
        vec![vec![CellValue::Text("200-001-8".into()), CellValue::Float(7.0)]],
    );
    let layout = default_layout(SourceKind::FoodFlavourings);
    let keys = CandidateKeys::new(None, Some("200-001-8"), None);
    let MatchOutcome::Matched(found) = find_first_match(&table, &keys, &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.values, vec![FieldValue::new("7")]);
}

#[test]
fn missing_projection_cells_are_empty_values() {
    let table = SourceTable::new("short", vec![row(&["100-51-6"])]);
    let layout = default_layout(SourceKind::EfsaPpp);
    let MatchOutcome::Matched(found) = find_first_match(&table, &keys("100-51-6"), &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.values, vec![FieldValue::new(""); 4]);
}

#[test]
fn contains_rule_matches_ec_inside_text() {
    let table = SourceTable::new(
        "additives",
        vec![
            row(&["E 100", "curcumin (EC 207-280-5)"]),
            row(&["E 200", "sorbic acid (EC 203-768-7)"]),
        ],
    );
    let layout = default_layout(SourceKind::FoodAdditive);
    let keys = CandidateKeys::new(Some("110-44-1"), Some("203-768-7"), Some("110-44-1"));
    let MatchOutcome::Matched(found) = find_first_match(&table, &keys, &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.row, 1);
    assert_eq!(found.values, vec![FieldValue::new("E 200")]);
}

#[test]
fn contains_rule_requires_min_length() {
    let rules = [MatchRule::Contains {
        key: CandidateKey::Ec,
        min_len: 2,
    }];
    let short = CandidateKeys::new(None, Some("7"), None);
    assert!(!cell_matches("E 170", &short, &rules));
    let long = CandidateKeys::new(None, Some("17"), None);
    assert!(cell_matches("E 170", &long, &rules));
}

#[test]
fn contains_rule_ignores_other_keys() {
    let rules = [MatchRule::Contains {
        key: CandidateKey::Ec,
        min_len: 2,
    }];
    let keys = CandidateKeys::new(Some("110-44-1"), None, Some("110-44-1"));
    assert!(!cell_matches("sorbic acid 110-44-1", &keys, &rules));
}

#[test]
fn key_columns_restrict_the_scan() {
    let table = efsa_table(vec![
        {
            let mut first = efsa_row("", "Via name column");
            first[1] = text("100-51-6");
            first
        },
        efsa_row("100-51-6", "Via CAS column"),
    ]);
    let mut layout = default_layout(SourceKind::EfsaPpp);
    layout.key_columns = KeyColumns::Only(vec![col("A")]);

    let MatchOutcome::Matched(found) = find_first_match(&table, &keys("100-51-6"), &layout) else {
        panic!("expected a match");
    };
    assert_eq!(found.row, 1);
    assert_eq!(found.values[0], FieldValue::new("Via CAS column"));
}
