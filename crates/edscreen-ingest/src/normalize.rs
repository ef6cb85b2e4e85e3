//! CAS/EC identifier normalization.

use edscreen_model::CellValue;

/// Keeps only ASCII digits and hyphens.
///
/// Never fails: malformed input degrades to a partial or empty string.
/// Normalizing an already normalized identifier returns it unchanged.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect()
}

/// Normalizes a cell as read from a spreadsheet or CSV file.
///
/// Numeric cells are stringified first, so a float cell holding `50000.0`
/// yields `50000`.
pub fn normalize_cell(cell: &CellValue) -> String {
    normalize_identifier(&cell.match_text())
}
