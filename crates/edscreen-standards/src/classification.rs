//! Hazard statement codes grouped into coarse categories.

#![deny(unsafe_code)]

/// One category and the hazard statement codes that indicate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardCategory {
    pub label: &'static str,
    pub codes: &'static [&'static str],
}

impl HazardCategory {
    /// True when any code occurs in `hazard_text`.
    pub fn matches(&self, hazard_text: &str) -> bool {
        self.codes.iter().any(|code| hazard_text.contains(code))
    }
}

/// Categories are tested in this order; the first hit wins.
const STANDARD_CATEGORIES: &[HazardCategory] = &[
    HazardCategory {
        label: "endocrine disruption (HH)",
        codes: &["EUH380", "EUH381"],
    },
    HazardCategory {
        label: "endocrine disruption (ENV)",
        codes: &["EUH430", "EUH431"],
    },
    HazardCategory {
        label: "carcinogenicity",
        codes: &["H350", "H351"],
    },
    HazardCategory {
        label: "germ cell mutagenicity",
        codes: &["H340", "H341"],
    },
    HazardCategory {
        label: "reproductive toxicity",
        codes: &["H360", "H361", "H362"],
    },
    HazardCategory {
        label: "PBT/vPvB",
        codes: &["EUH440", "EUH441"],
    },
    HazardCategory {
        label: "PMT/vPvM",
        codes: &["EUH450", "EUH451"],
    },
    HazardCategory {
        label: "specific target organ toxicity",
        codes: &["H370", "H371", "H372", "H373"],
    },
    HazardCategory {
        label: "respiratory/skin sensitisation",
        codes: &["H317", "H334"],
    },
    HazardCategory {
        label: "acute toxicity",
        codes: &[
            "H300", "H301", "H302", "H310", "H311", "H312", "H330", "H331", "H332",
        ],
    },
    HazardCategory {
        label: "aquatic toxicity",
        codes: &["H400", "H410", "H411", "H412", "H413"],
    },
];

/// Immutable category table shared by every record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationMapping {
    categories: Vec<HazardCategory>,
}

impl Default for ClassificationMapping {
    fn default() -> Self {
        Self::standard()
    }
}

impl ClassificationMapping {
    pub fn standard() -> Self {
        Self {
            categories: STANDARD_CATEGORIES.to_vec(),
        }
    }

    pub fn new(categories: Vec<HazardCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[HazardCategory] {
        &self.categories
    }

    /// Label of the first category with a code in `hazard_text`.
    pub fn first_match(&self, hazard_text: &str) -> Option<&'static str> {
        self.categories
            .iter()
            .find(|category| category.matches(hazard_text))
            .map(|category| category.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixed_codes_match_by_substring() {
        let mapping = ClassificationMapping::standard();
        assert_eq!(mapping.first_match("H361f"), Some("reproductive toxicity"));
        assert_eq!(mapping.first_match("H360FD"), Some("reproductive toxicity"));
    }

    #[test]
    fn earlier_category_wins() {
        let mapping = ClassificationMapping::standard();
        assert_eq!(
            mapping.first_match("H302, H351, H361d"),
            Some("carcinogenicity")
        );
        assert_eq!(
            mapping.first_match("H400; EUH380"),
            Some("endocrine disruption (HH)")
        );
    }

    #[test]
    fn unmapped_codes_yield_none() {
        let mapping = ClassificationMapping::standard();
        assert_eq!(mapping.first_match("H225, H319"), None);
        assert_eq!(mapping.first_match(""), None);
    }
}
