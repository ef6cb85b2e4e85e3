//! Ingestion of the user's substance list.

use std::path::Path;

use tracing::{debug, info};

use edscreen_model::{CellValue, ColumnRef, SourceTable, Substance};

use crate::error::{IngestError, Result};
use crate::normalize::normalize_cell;
use crate::sheet::{SheetSelector, read_sheet};

/// Header of the required identifier column.
pub const CAS_COLUMN: &str = "CAS";
/// Header of the optional EC number column.
pub const EC_COLUMN: &str = "EC";

/// Reads the first sheet of `path` and turns it into substances.
///
/// # Errors
///
/// Fails when the file cannot be read or has no `CAS` column.
pub fn read_substances(path: &Path) -> Result<Vec<Substance>> {
    let table = read_sheet(path, &SheetSelector::First)?;
    let substances = substances_from_table(&table).map_err(|error| match error {
        IngestError::MissingColumn { column, .. } => IngestError::MissingColumn {
            column,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    info!(
        path = %path.display(),
        rows = table.len().saturating_sub(1),
        substances = substances.len(),
        "input list ingested"
    );
    Ok(substances)
}

fn find_column(header: &[CellValue], name: &str) -> Option<ColumnRef> {
    header
        .iter()
        .position(|cell| cell.match_text() == name)
        .map(ColumnRef::from_index)
}

/// Builds substances from a table whose first row is the header.
///
/// Rows whose `CAS` cell is empty, or empty after normalization, are
/// dropped; ids are assigned to the kept rows in order, starting at 1.
pub fn substances_from_table(table: &SourceTable) -> Result<Vec<Substance>> {
    let missing_cas = || IngestError::MissingColumn {
        column: CAS_COLUMN.to_string(),
        path: table.name().into(),
    };
    let header = table.row(0).ok_or_else(missing_cas)?;
    let cas_column = find_column(header, CAS_COLUMN).ok_or_else(missing_cas)?;
    let ec_column = find_column(header, EC_COLUMN);

    let mut substances = Vec::new();
    for (row_index, _) in table.rows().skip(1) {
        let Some(cell) = table.cell(row_index, cas_column) else {
            continue;
        };
        if cell.is_missing() {
            continue;
        }
        let input = normalize_cell(cell);
        if input.is_empty() {
            debug!(row = row_index + 1, "dropping row with no usable CAS");
            continue;
        }
        let ec = ec_column
            .and_then(|column| table.cell(row_index, column))
            .map(normalize_cell);
        let id = substances.len() + 1;
        // Non-empty by the check above.
        if let Ok(substance) = Substance::new(id, input) {
            substances.push(substance.with_ec(ec));
        }
    }
    Ok(substances)
}
