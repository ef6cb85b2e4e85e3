//! Built-in layouts of the published regulatory lists.

#![deny(unsafe_code)]

use edscreen_ingest::SheetSelector;
use edscreen_model::{ColumnRef, SourceKind};

use crate::layout::{CandidateKey, KeyColumns, MatchRule, SourceLayout};

const CL_INVENTORY_COLUMNS: &[&str] = &[
    "C", "B", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
];
const PACT_COLUMNS: &[&str] = &[
    "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
];

fn default_columns(kind: SourceKind) -> &'static [&'static str] {
    match kind {
        SourceKind::ClInventory => CL_INVENTORY_COLUMNS,
        SourceKind::EfsaPpp => &["H", "I", "J", "N"],
        SourceKind::Bpr => &["F", "G"],
        SourceKind::EdAssessment => &["E", "F", "G", "H"],
        SourceKind::Svhc => &["D", "E", "F"],
        SourceKind::FoodAdditive => &["A"],
        SourceKind::FoodFlavourings => &["B"],
        SourceKind::SvhcIntent => &["E", "F", "G"],
        SourceKind::Pact => PACT_COLUMNS,
        SourceKind::Corap => &["E", "F", "G"],
    }
}

fn default_rules(kind: SourceKind) -> Vec<MatchRule> {
    match kind {
        // E-number tables list the EC number inside a free-text cell.
        SourceKind::FoodAdditive => vec![
            MatchRule::Exact,
            MatchRule::Contains {
                key: CandidateKey::Ec,
                min_len: 2,
            },
        ],
        _ => vec![MatchRule::Exact],
    }
}

/// The layout a source uses unless the run configuration overrides it.
pub fn default_layout(kind: SourceKind) -> SourceLayout {
    let projection = default_columns(kind)
        .iter()
        .filter_map(|letters| letters.parse::<ColumnRef>().ok())
        .collect();
    SourceLayout {
        kind,
        sheet: SheetSelector::First,
        key_columns: KeyColumns::All,
        projection,
        rules: default_rules(kind),
    }
}

pub fn default_layouts() -> Vec<SourceLayout> {
    SourceKind::ALL.into_iter().map(default_layout).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_default_column() {
        for kind in SourceKind::ALL {
            let layout = default_layout(kind);
            assert_eq!(layout.projection.len(), kind.detail_fields().len(), "{kind}");
        }
    }

    #[test]
    fn efsa_ppp_projects_h_i_j_n() {
        let layout = default_layout(SourceKind::EfsaPpp);
        let fields: Vec<(&str, String)> = layout
            .fields()
            .map(|(label, column)| (label, column.letters()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("Status", "H".to_string()),
                ("Conclusion HH", "I".to_string()),
                ("Conclusion non-TO", "J".to_string()),
                ("EFSA conclusion link", "N".to_string()),
            ]
        );
        assert_eq!(layout.rules, vec![MatchRule::Exact]);
    }

    #[test]
    fn only_food_additive_uses_containment() {
        for kind in SourceKind::ALL {
            let has_contains = default_layout(kind)
                .rules
                .iter()
                .any(|rule| matches!(rule, MatchRule::Contains { .. }));
            assert_eq!(has_contains, kind == SourceKind::FoodAdditive, "{kind}");
        }
    }
}
