use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::field::FieldValue;

/// One input chemical, in ingestion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substance {
    /// 1-based position among the kept input rows.
    pub id: usize,
    /// Normalized CAS string as supplied; never empty.
    pub input_identifier: String,
    pub cas: FieldValue,
    pub ec: FieldValue,
}

impl Substance {
    /// Creates a substance whose `CAS` starts out equal to the input identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyIdentifier`] when `input_identifier` is empty.
    pub fn new(id: usize, input_identifier: impl Into<String>) -> Result<Self> {
        let input_identifier = input_identifier.into();
        if input_identifier.is_empty() {
            return Err(ModelError::EmptyIdentifier);
        }
        Ok(Self {
            id,
            cas: FieldValue::new(input_identifier.clone()),
            input_identifier,
            ec: FieldValue::Unset,
        })
    }

    #[must_use]
    pub fn with_ec(mut self, ec: Option<String>) -> Self {
        self.ec = match ec {
            Some(value) if !value.is_empty() => FieldValue::new(value),
            _ => FieldValue::Unset,
        };
        self
    }
}
