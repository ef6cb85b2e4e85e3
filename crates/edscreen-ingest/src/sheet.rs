//! Reading one worksheet (or CSV file) into a [`SourceTable`].

use std::fmt;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::{NaiveDateTime, Timelike};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use edscreen_model::{CellValue, SourceTable};

use crate::error::{IngestError, Result};

/// Extensions accepted for input lists and source snapshots.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xlsm", "xls", "ods"];

/// Which worksheet of a workbook to read. Ignored for CSV files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SheetSelector {
    #[default]
    First,
    Index(usize),
    Name(String),
}

impl From<String> for SheetSelector {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::First
        } else if let Ok(index) = trimmed.parse::<usize>() {
            Self::Index(index)
        } else {
            Self::Name(trimmed.to_string())
        }
    }
}

impl From<SheetSelector> for String {
    fn from(value: SheetSelector) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("0"),
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

pub fn is_supported_file(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Reads a sheet, choosing the CSV or workbook reader by extension.
pub fn read_sheet(path: &Path, selector: &SheetSelector) -> Result<SourceTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = extension_of(path);
    match extension.as_str() {
        "csv" => read_csv_sheet(path),
        "xlsx" | "xlsm" | "xls" | "ods" => read_workbook_sheet(path, selector),
        _ => Err(IngestError::UnsupportedFormat {
            extension,
            path: path.to_path_buf(),
        }),
    }
}

/// Reads a CSV file without header handling; every record becomes a row.
pub fn read_csv_sheet(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<CellValue> = record
            .iter()
            .map(|value| {
                let value = value.trim_matches('\u{feff}');
                if value.trim().is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(value.to_string())
                }
            })
            .collect();
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read csv sheet");
    Ok(SourceTable::new(sheet_name_of(path), rows))
}

fn read_workbook_sheet(path: &Path, selector: &SheetSelector) -> Result<SourceTable> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|error| workbook_error(error.to_string()))?;
    let sheet_names = workbook.sheet_names();
    let name = match selector {
        SheetSelector::First => sheet_names.first().cloned(),
        SheetSelector::Index(index) => sheet_names.get(*index).cloned(),
        SheetSelector::Name(name) => sheet_names.iter().find(|candidate| *candidate == name).cloned(),
    }
    .ok_or_else(|| IngestError::SheetNotFound {
        sheet: selector.to_string(),
        path: path.to_path_buf(),
    })?;
    let range = workbook
        .worksheet_range(&name)
        .map_err(|error| workbook_error(error.to_string()))?;
    let rows = range_to_rows(&range);
    debug!(path = %path.display(), sheet = %name, rows = rows.len(), "read worksheet");
    Ok(SourceTable::new(name, rows))
}

/// Converts a calamine range, padding so that cell positions keep their
/// sheet coordinates even when the used area does not start at `A1`.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Vec<CellValue>> = (0..start_row).map(|_| Vec::new()).collect();
    for sheet_row in range.rows() {
        let mut row = Vec::with_capacity(start_col as usize + sheet_row.len());
        row.extend((0..start_col).map(|_| CellValue::Missing));
        row.extend(sheet_row.iter().map(data_to_cell));
        rows.push(row);
    }
    rows
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::String(text) => {
            if text.trim().is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(text.clone())
            }
        }
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) if !value.is_duration() => CellValue::Date(iso_date_text(datetime)),
            _ => CellValue::Float(value.as_f64()),
        },
        Data::DateTimeIso(text) => CellValue::Date(text.clone()),
        Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}

/// Date-only when the time part is midnight.
fn iso_date_text(datetime: NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn sheet_name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sheet")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_index_or_name() {
        assert_eq!(SheetSelector::from(String::new()), SheetSelector::First);
        assert_eq!(SheetSelector::from("2".to_string()), SheetSelector::Index(2));
        assert_eq!(
            SheetSelector::from("Overview".to_string()),
            SheetSelector::Name("Overview".to_string())
        );
    }

    #[test]
    fn dates_render_as_iso() {
        let midnight = NaiveDateTime::parse_from_str("2025-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(iso_date_text(midnight), "2025-01-01");
        let noon = NaiveDateTime::parse_from_str("2025-01-01 12:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(iso_date_text(noon), "2025-01-01 12:00:00");
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_file(Path::new("PPP ED list.XLSX")));
        assert!(is_supported_file(Path::new("list.csv")));
        assert!(!is_supported_file(Path::new("notes.txt")));
    }
}
