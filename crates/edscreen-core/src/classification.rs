//! Harmonised and self-classified assessment columns.

use edscreen_model::{FieldValue, Record};
use edscreen_standards::ClassificationMapping;

/// `C&L Type` value marking an authoritative classification.
pub const HARMONISED_TYPE: &str = "Harmonised C&L";
/// Label for hazard text that maps to no category.
pub const OTHER_CLASSIFICATION: &str = "other classification";

/// Category of a hazard statement text.
///
/// `None` for empty or placeholder text; the fallback label when no
/// category code occurs in it.
pub fn classify_hazard_text(
    mapping: &ClassificationMapping,
    hazard_text: Option<&str>,
) -> Option<&'static str> {
    let text = hazard_text?;
    Some(mapping.first_match(text).unwrap_or(OTHER_CLASSIFICATION))
}

/// Fills the two assessment columns of each record.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationDeriver<'a> {
    mapping: &'a ClassificationMapping,
}

impl<'a> ClassificationDeriver<'a> {
    pub fn new(mapping: &'a ClassificationMapping) -> Self {
        Self { mapping }
    }

    /// Exactly one of the two columns receives the category, chosen by the
    /// record's `C&L Type`; the other stays unset.
    pub fn derive(&self, record: &mut Record) {
        let category = classify_hazard_text(self.mapping, record.clp.hazard_statements.non_empty())
            .map_or(FieldValue::Unset, FieldValue::new);
        let harmonised = record
            .clp
            .cl_type
            .value()
            .is_some_and(|value| value.trim() == HARMONISED_TYPE);
        if harmonised {
            record.harmonized_assessment = category;
            record.self_classified_assessment = FieldValue::Unset;
        } else {
            record.harmonized_assessment = FieldValue::Unset;
            record.self_classified_assessment = category;
        }
    }

    pub fn derive_all(&self, records: &mut [Record]) {
        for record in records {
            self.derive(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use edscreen_model::Substance;

    use super::*;

    fn record(hazards: Option<&str>, cl_type: Option<&str>) -> Record {
        let substance = Substance::new(1, "100-51-6").unwrap();
        let mut record = Record::new(&substance);
        if let Some(hazards) = hazards {
            record.clp.hazard_statements.set(hazards);
        }
        if let Some(cl_type) = cl_type {
            record.clp.cl_type.set(cl_type);
        }
        record
    }

    #[test]
    fn harmonised_goes_to_harmonized_column() {
        let mapping = ClassificationMapping::standard();
        let mut record = record(Some("H361f"), Some("Harmonised C&L"));
        ClassificationDeriver::new(&mapping).derive(&mut record);
        assert_eq!(
            record.harmonized_assessment,
            FieldValue::new("reproductive toxicity")
        );
        assert_eq!(record.self_classified_assessment, FieldValue::Unset);
    }

    #[test]
    fn other_types_go_to_self_classified_column() {
        let mapping = ClassificationMapping::standard();
        let mut record = record(Some("H225, H319"), Some("Self-classified C&L"));
        ClassificationDeriver::new(&mapping).derive(&mut record);
        assert_eq!(record.harmonized_assessment, FieldValue::Unset);
        assert_eq!(
            record.self_classified_assessment,
            FieldValue::new(OTHER_CLASSIFICATION)
        );
    }

    #[test]
    fn placeholder_hazard_text_leaves_both_unset() {
        let mapping = ClassificationMapping::standard();
        for hazards in [None, Some(""), Some("-")] {
            let mut record = record(hazards, Some("Harmonised C&L"));
            ClassificationDeriver::new(&mapping).derive(&mut record);
            assert_eq!(record.harmonized_assessment, FieldValue::Unset);
            assert_eq!(record.self_classified_assessment, FieldValue::Unset);
        }
    }

    #[test]
    fn fallback_label_for_unmapped_codes() {
        let mapping = ClassificationMapping::standard();
        assert_eq!(
            classify_hazard_text(&mapping, Some("H226")),
            Some(OTHER_CLASSIFICATION)
        );
        assert_eq!(classify_hazard_text(&mapping, None), None);
    }
}
