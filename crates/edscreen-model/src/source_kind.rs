//! Catalogue of the regulatory lists a run can screen against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// ECHA C&L inventory; fills the identity and classification columns.
    ClInventory,
    /// EFSA overview of ED assessments for pesticide active substances.
    EfsaPpp,
    /// Biocidal active substances with an ED assessment.
    Bpr,
    /// ECHA endocrine disruptor assessment list.
    EdAssessment,
    /// REACH candidate list of substances of very high concern.
    Svhc,
    FoodAdditive,
    FoodFlavourings,
    /// Registry of SVHC intentions.
    SvhcIntent,
    /// Public activities coordination tool.
    Pact,
    /// Community rolling action plan.
    Corap,
}

const CL_INVENTORY_FIELDS: &[&str] = &[
    "EC number",
    "Name ECHA-CHEM",
    "ECHA-CHEM checked",
    "REACH tonnage band",
    "Entries C&L",
    "C&L URL",
    "C&L Type",
    "Joint Entries",
    "Classification - Hazard classes",
    "Classification - Hazard statements",
    "Classification - Organs/ExposureRoute",
    "Labeling - Hazard statements",
    "Labeling - Supplementary Hazard statements",
    "Labeling - Organs/ExposureRoute",
    "Specific concentration limits",
    "M-factors",
    "C&L notes",
];

const PACT_FIELDS: &[&str] = &[
    "SEv", "SEv link", "DEv", "DEv link", "ED", "ED link", "ARN", "ARN link", "PBT", "PBT link",
    "CLH", "CLH link", "SVHC", "SVHC link",
];

impl SourceKind {
    /// Every kind, in the order records are enriched and columns are written.
    pub const ALL: [SourceKind; 10] = [
        Self::ClInventory,
        Self::EfsaPpp,
        Self::Bpr,
        Self::EdAssessment,
        Self::Svhc,
        Self::FoodAdditive,
        Self::FoodFlavourings,
        Self::SvhcIntent,
        Self::Pact,
        Self::Corap,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::ClInventory => "cl-inventory",
            Self::EfsaPpp => "efsa-ppp",
            Self::Bpr => "bpr",
            Self::EdAssessment => "ed-assessment",
            Self::Svhc => "svhc",
            Self::FoodAdditive => "food-additive",
            Self::FoodFlavourings => "food-flavourings",
            Self::SvhcIntent => "svhc-intent",
            Self::Pact => "pact",
            Self::Corap => "corap",
        }
    }

    /// Prefix of the output columns owned by this source.
    pub fn namespace(self) -> &'static str {
        match self {
            Self::ClInventory => "C&L",
            Self::EfsaPpp => "ED PPP",
            Self::Bpr => "BPR",
            Self::EdAssessment => "ED Assessment List",
            Self::Svhc => "SVHC",
            Self::FoodAdditive => "Food additive",
            Self::FoodFlavourings => "Food flavourings",
            Self::SvhcIntent => "SVHC intent",
            Self::Pact => "PACT",
            Self::Corap => "CoRAP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ClInventory => "ECHA C&L inventory (identity and classification)",
            Self::EfsaPpp => "EFSA ED assessment of pesticide active substances",
            Self::Bpr => "Biocidal active substances ED assessment",
            Self::EdAssessment => "ECHA endocrine disruptor assessment list",
            Self::Svhc => "SVHC candidate list",
            Self::FoodAdditive => "EU food additives",
            Self::FoodFlavourings => "EU food flavourings",
            Self::SvhcIntent => "Registry of SVHC intentions",
            Self::Pact => "Public activities coordination tool (PACT)",
            Self::Corap => "Community rolling action plan (CoRAP)",
        }
    }

    /// Detail fields in projection order.
    pub fn detail_fields(self) -> &'static [&'static str] {
        match self {
            Self::ClInventory => CL_INVENTORY_FIELDS,
            Self::EfsaPpp => &[
                "Status",
                "Conclusion HH",
                "Conclusion non-TO",
                "EFSA conclusion link",
            ],
            Self::Bpr => &["ED HH", "ED ENV"],
            Self::EdAssessment => &["Outcome", "Status", "Authority", "Last updated"],
            Self::Svhc => &["Reason", "Date Inclusion", "Decision"],
            Self::FoodAdditive => &["E number"],
            Self::FoodFlavourings => &["FL"],
            Self::SvhcIntent => &["Status", "Scope", "Last updated"],
            Self::Pact => PACT_FIELDS,
            Self::Corap => &["Initial grounds of Concern", "Status", "Latest update"],
        }
    }

    pub fn presence_header(self) -> String {
        match self {
            Self::ClInventory => "On C&L?".to_string(),
            other => format!("{}: Yes/No", other.namespace()),
        }
    }

    pub fn detail_header(self, field: &str) -> String {
        match self {
            Self::ClInventory => field.to_string(),
            other => format!("{}: {field}", other.namespace()),
        }
    }

    /// Lowercase fragments identifying a snapshot of this list by file name.
    ///
    /// A fragment only counts where it starts a word of the name.
    pub fn file_keywords(self) -> &'static [&'static str] {
        match self {
            Self::ClInventory => &["c&l inventory", "cl_inventory", "cl inventory", "clp"],
            Self::EfsaPpp => &["ppp ed list", "efsa_ppp_ed", "ppp_ed", "efsa ppp"],
            Self::Bpr => &["bpr", "biocid"],
            Self::EdAssessment => &["ed assessment", "ed_assessment"],
            Self::Svhc => &["candidate list", "candidate_list", "svhc list", "svhc_list"],
            Self::FoodAdditive => &["food additive", "food_additive"],
            Self::FoodFlavourings => &["flavouring", "flavoring"],
            Self::SvhcIntent => &["svhc intent", "svhc_intent", "registry of intentions"],
            Self::Pact => &["pact"],
            Self::Corap => &["corap"],
        }
    }

    /// The identity source must run before every other source.
    pub fn is_identity(self) -> bool {
        matches!(self, Self::ClInventory)
    }
}

impl FromStr for SourceKind {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ModelError::UnknownSourceKind(raw.to_string()))
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.key().parse::<SourceKind>().unwrap(), kind);
        }
        assert_eq!("EFSA_PPP".parse::<SourceKind>().unwrap(), SourceKind::EfsaPpp);
        assert!("reach".parse::<SourceKind>().is_err());
    }

    #[test]
    fn identity_source_is_first() {
        assert!(SourceKind::ALL[0].is_identity());
        assert_eq!(SourceKind::ALL.iter().filter(|k| k.is_identity()).count(), 1);
    }

    #[test]
    fn namespaced_headers() {
        assert_eq!(SourceKind::EfsaPpp.presence_header(), "ED PPP: Yes/No");
        assert_eq!(
            SourceKind::EfsaPpp.detail_header("Status"),
            "ED PPP: Status"
        );
        assert_eq!(SourceKind::ClInventory.presence_header(), "On C&L?");
        assert_eq!(SourceKind::ClInventory.detail_header("M-factors"), "M-factors");
    }
}
