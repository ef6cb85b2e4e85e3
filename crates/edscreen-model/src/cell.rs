use serde::{Deserialize, Serialize};

/// One spreadsheet or CSV cell as the reader stored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Date or date-time, already rendered as ISO-8601 text.
    Date(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Stripped string form used for identifier comparison.
    pub fn match_text(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            other => other.display_text(),
        }
    }

    /// String form used when a cell is projected into a record field.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format_numeric(*value),
            Self::Bool(value) => if *value { "TRUE" } else { "FALSE" }.to_string(),
            Self::Date(value) => value.clone(),
            Self::Missing => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Formats a float without a trailing `.0` for whole numbers.
///
/// Spreadsheets often store identifiers typed as numbers as floats; `50000.0`
/// has to read back as `50000`.
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
