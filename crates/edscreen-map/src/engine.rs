//! Matching engine: first matching row of a source table.
//!
//! Cells are visited in row-major order (rows top-to-bottom, cells
//! left-to-right). The first cell accepted by any of the layout's rules
//! decides the row; the detail fields are then projected from that row's
//! configured columns, not from the matched cell's column.

use tracing::trace;

use edscreen_model::{ColumnRef, FieldValue, PLACEHOLDER, SourceTable};
use edscreen_standards::{KeyColumns, MatchRule, SourceLayout};

use crate::keys::CandidateKeys;

/// Where a substance was found and what the row contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMatch {
    /// Zero-based row index in the sheet.
    pub row: usize,
    /// Column of the cell that matched.
    pub column: ColumnRef,
    /// Projected detail values, in the layout's field order.
    pub values: Vec<FieldValue>,
}

/// Result of looking one substance up in one loaded source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(RowMatch),
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Whether one stripped cell text is accepted by any rule.
pub fn cell_matches(text: &str, keys: &CandidateKeys, rules: &[MatchRule]) -> bool {
    if text.is_empty() || text == PLACEHOLDER {
        return false;
    }
    rules.iter().any(|rule| match rule {
        MatchRule::Exact => keys.values().contains(&text),
        MatchRule::Contains { key, min_len } => keys
            .get(*key)
            .filter(|value| value.chars().count() >= *min_len)
            .is_some_and(|value| text.contains(value)),
    })
}

/// Scans `table` for the first cell accepted by the layout's rules.
pub fn find_first_match(
    table: &SourceTable,
    keys: &CandidateKeys,
    layout: &SourceLayout,
) -> MatchOutcome {
    if keys.is_empty() {
        return MatchOutcome::NoMatch;
    }
    let located = locate(table, keys, &layout.key_columns, &layout.rules);
    match located {
        Some((row, column)) => {
            trace!(
                source = %layout.kind,
                row = row + 1,
                column = %column,
                "matched row"
            );
            MatchOutcome::Matched(RowMatch {
                row,
                column,
                values: project_row(table, row, &layout.projection),
            })
        }
        None => MatchOutcome::NoMatch,
    }
}

fn locate(
    table: &SourceTable,
    keys: &CandidateKeys,
    key_columns: &KeyColumns,
    rules: &[MatchRule],
) -> Option<(usize, ColumnRef)> {
    for (row_index, row) in table.rows() {
        for (column_index, cell) in row.iter().enumerate() {
            if !key_columns.includes(column_index) {
                continue;
            }
            if cell_matches(&cell.match_text(), keys, rules) {
                return Some((row_index, ColumnRef::from_index(column_index)));
            }
        }
    }
    None
}

/// Reads the projection columns of one row.
///
/// Cells outside the populated area project as empty values, so a matched
/// row always sets every detail field.
pub fn project_row(table: &SourceTable, row: usize, projection: &[ColumnRef]) -> Vec<FieldValue> {
    projection
        .iter()
        .map(|column| {
            let text = table
                .cell(row, *column)
                .map(|cell| cell.display_text())
                .unwrap_or_default();
            FieldValue::new(text)
        })
        .collect()
}

/// Matches substances against one layout.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    layout: &'a SourceLayout,
}

impl<'a> Matcher<'a> {
    pub fn new(layout: &'a SourceLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &'a SourceLayout {
        self.layout
    }

    pub fn find(&self, table: &SourceTable, keys: &CandidateKeys) -> MatchOutcome {
        find_first_match(table, keys, self.layout)
    }
}
