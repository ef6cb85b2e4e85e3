use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Highest column Excel addresses (`XFD`), zero-based.
const MAX_COLUMN_INDEX: usize = 16_383;

/// Zero-based column position addressed by spreadsheet letters (`A`, `H`, `AA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnRef(usize);

impl ColumnRef {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn letters(self) -> String {
        let mut remaining = self.0 + 1;
        let mut letters = Vec::new();
        while remaining > 0 {
            let rem = (remaining - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            remaining = (remaining - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl FromStr for ColumnRef {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let letters = raw.trim();
        if letters.is_empty() || letters.len() > 3 {
            return Err(ModelError::InvalidColumn(raw.to_string()));
        }
        let mut index = 0usize;
        for ch in letters.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(ModelError::InvalidColumn(raw.to_string()));
            }
            let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            index = index * 26 + digit;
        }
        let index = index - 1;
        if index > MAX_COLUMN_INDEX {
            return Err(ModelError::InvalidColumn(raw.to_string()));
        }
        Ok(Self(index))
    }
}

impl TryFrom<String> for ColumnRef {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColumnRef> for String {
    fn from(value: ColumnRef) -> Self {
        value.letters()
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}
