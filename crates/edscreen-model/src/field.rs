//! Field values with an explicit "unset" state.
//!
//! Records never store the placeholder string internally. A field is either
//! [`FieldValue::Unset`] or carries the value a source contributed; the
//! placeholder only appears when a record is rendered at the output boundary.

use serde::{Serialize, Serializer};

/// Marker written to output for fields that no source has determined.
pub const PLACEHOLDER: &str = "-";

/// A single record field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FieldValue {
    #[default]
    Unset,
    Value(String),
}

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The contributed value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value.as_str()),
            Self::Unset => None,
        }
    }

    /// The contributed value when it has visible content.
    pub fn non_empty(&self) -> Option<&str> {
        self.value()
            .map(str::trim)
            .filter(|value| !value.is_empty() && *value != PLACEHOLDER)
    }

    /// Text written to output tables.
    pub fn as_output(&self) -> &str {
        self.value().unwrap_or(PLACEHOLDER)
    }

    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::Value(value.into());
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_output())
    }
}

/// Whether a substance appears on a source list.
///
/// `Undetermined` means the source was not available for the run; it is
/// distinct from a definite `No`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Presence {
    #[default]
    Undetermined,
    Yes,
    No,
}

impl Presence {
    pub fn from_matched(matched: bool) -> Self {
        if matched { Self::Yes } else { Self::No }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn is_determined(self) -> bool {
        !matches!(self, Self::Undetermined)
    }

    pub fn as_output(self) -> &'static str {
        match self {
            Self::Undetermined => PLACEHOLDER,
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl Serialize for Presence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_renders_placeholder() {
        assert_eq!(FieldValue::Unset.as_output(), "-");
        assert_eq!(FieldValue::new("Assessed").as_output(), "Assessed");
    }

    #[test]
    fn non_empty_skips_blank_and_placeholder_values() {
        assert_eq!(FieldValue::new("  ").non_empty(), None);
        assert_eq!(FieldValue::new("-").non_empty(), None);
        assert_eq!(FieldValue::new(" ED ").non_empty(), Some("ED"));
        assert_eq!(FieldValue::Unset.non_empty(), None);
    }

    #[test]
    fn presence_outputs() {
        assert_eq!(Presence::default().as_output(), "-");
        assert_eq!(Presence::from_matched(true).as_output(), "Yes");
        assert_eq!(Presence::from_matched(false).as_output(), "No");
    }
}
