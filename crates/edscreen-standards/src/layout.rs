#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use edscreen_ingest::SheetSelector;
use edscreen_model::{ColumnRef, SourceKind};

/// Identifier of a substance offered to the matcher as a candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKey {
    Cas,
    Ec,
    Input,
}

/// How a stripped cell value is compared against a substance's keys.
///
/// A source carries one or more rules; a cell matches when any rule accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum MatchRule {
    /// Cell equals any candidate key (case-sensitive).
    Exact,
    /// Cell contains one specific key as a substring, provided that key is
    /// at least `min_len` characters long.
    Contains { key: CandidateKey, min_len: usize },
}

impl MatchRule {
    pub fn describe(&self) -> String {
        match self {
            Self::Exact => "exact".to_string(),
            Self::Contains { key, min_len } => {
                format!("contains {key:?} (len >= {min_len})").to_lowercase()
            }
        }
    }
}

/// Columns whose cells are compared against the candidate keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyColumns {
    /// Every cell of every row.
    #[default]
    All,
    Only(Vec<ColumnRef>),
}

impl KeyColumns {
    pub fn includes(&self, column: usize) -> bool {
        match self {
            Self::All => true,
            Self::Only(columns) => columns.iter().any(|c| c.index() == column),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Only(columns) => columns
                .iter()
                .map(|column| column.letters())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Where a source keeps its identifiers and detail fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub kind: SourceKind,
    pub sheet: SheetSelector,
    pub key_columns: KeyColumns,
    /// One column per entry of [`SourceKind::detail_fields`], same order.
    pub projection: Vec<ColumnRef>,
    pub rules: Vec<MatchRule>,
}

impl SourceLayout {
    /// Detail field labels paired with their columns.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, ColumnRef)> + '_ {
        self.kind
            .detail_fields()
            .iter()
            .copied()
            .zip(self.projection.iter().copied())
    }

    /// Highest column the layout reads, for validating sheet width.
    pub fn max_column(&self) -> Option<ColumnRef> {
        let key_max = match &self.key_columns {
            KeyColumns::All => None,
            KeyColumns::Only(columns) => columns.iter().copied().max(),
        };
        self.projection.iter().copied().max().max(key_max)
    }

    pub fn set_column(&mut self, field: &str, column: ColumnRef) -> bool {
        match self
            .kind
            .detail_fields()
            .iter()
            .position(|label| *label == field)
        {
            Some(index) => {
                self.projection[index] = column;
                true
            }
            None => false,
        }
    }
}
