//! Candidate identifiers of one substance.

use edscreen_model::{PLACEHOLDER, Record};
use edscreen_standards::CandidateKey;

/// The identifiers a substance is looked up by.
///
/// Unset, empty and placeholder values are never candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateKeys {
    cas: Option<String>,
    ec: Option<String>,
    input: Option<String>,
}

fn usable(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != PLACEHOLDER)
        .map(str::to_string)
}

impl CandidateKeys {
    pub fn new(cas: Option<&str>, ec: Option<&str>, input: Option<&str>) -> Self {
        Self {
            cas: usable(cas),
            ec: usable(ec),
            input: usable(input),
        }
    }

    /// Keys taken from the identity columns of a record as they stand now.
    pub fn from_record(record: &Record) -> Self {
        Self::new(
            record.cas.value(),
            record.ec.value(),
            Some(record.input.as_str()),
        )
    }

    pub fn get(&self, key: CandidateKey) -> Option<&str> {
        match key {
            CandidateKey::Cas => self.cas.as_deref(),
            CandidateKey::Ec => self.ec.as_deref(),
            CandidateKey::Input => self.input.as_deref(),
        }
    }

    /// Distinct keys in `CAS`, `EC`, `Input` order.
    pub fn values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = Vec::with_capacity(3);
        for value in [&self.cas, &self.ec, &self.input].into_iter().flatten() {
            if !values.contains(&value.as_str()) {
                values.push(value.as_str());
            }
        }
        values
    }

    pub fn is_empty(&self) -> bool {
        self.cas.is_none() && self.ec.is_none() && self.input.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_keys_are_excluded() {
        let keys = CandidateKeys::new(Some("-"), Some("  "), Some("100-51-6"));
        assert_eq!(keys.values(), vec!["100-51-6"]);
        assert_eq!(keys.get(CandidateKey::Cas), None);
    }

    #[test]
    fn duplicate_keys_collapse() {
        let keys = CandidateKeys::new(Some("100-51-6"), Some("202-859-9"), Some("100-51-6"));
        assert_eq!(keys.values(), vec!["100-51-6", "202-859-9"]);
    }
}
