//! Per-substance output record with one namespace per regulatory source.
//!
//! Every namespace starts fully unset. The merger writes a namespace as a
//! unit: presence plus all detail fields from one matched row, or presence
//! `No` with the details left unset.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::field::{FieldValue, Presence};
use crate::source_kind::SourceKind;
use crate::substance::Substance;

pub const HARMONIZED_HEADER: &str = "Harmonized C&L assessment";
pub const SELF_CLASSIFIED_HEADER: &str = "Self-classified C&L assessment";

/// Uniform access to a source's presence flag and detail fields.
///
/// `details` and `details_mut` return fields in the order of
/// [`SourceKind::detail_fields`].
pub trait SourceNamespace {
    fn presence(&self) -> Presence;
    fn set_presence(&mut self, presence: Presence);
    fn details(&self) -> Vec<&FieldValue>;
    fn details_mut(&mut self) -> Vec<&mut FieldValue>;
}

/// C&L inventory columns; presence is written as `On C&L?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClpIdentity {
    pub on_cl: Presence,
    /// Backfills the record's `EC` column; not written on its own.
    pub ec_number: FieldValue,
    pub name: FieldValue,
    pub echa_chem_checked: FieldValue,
    pub reach_tonnage_band: FieldValue,
    pub entries: FieldValue,
    pub url: FieldValue,
    pub cl_type: FieldValue,
    pub joint_entries: FieldValue,
    pub hazard_classes: FieldValue,
    pub hazard_statements: FieldValue,
    pub organs_exposure_route: FieldValue,
    pub labelling_hazard_statements: FieldValue,
    pub labelling_supplementary_statements: FieldValue,
    pub labelling_organs_exposure_route: FieldValue,
    pub specific_concentration_limits: FieldValue,
    pub m_factors: FieldValue,
    pub notes: FieldValue,
}

impl SourceNamespace for ClpIdentity {
    fn presence(&self) -> Presence {
        self.on_cl
    }

    fn set_presence(&mut self, presence: Presence) {
        self.on_cl = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![
            &self.ec_number,
            &self.name,
            &self.echa_chem_checked,
            &self.reach_tonnage_band,
            &self.entries,
            &self.url,
            &self.cl_type,
            &self.joint_entries,
            &self.hazard_classes,
            &self.hazard_statements,
            &self.organs_exposure_route,
            &self.labelling_hazard_statements,
            &self.labelling_supplementary_statements,
            &self.labelling_organs_exposure_route,
            &self.specific_concentration_limits,
            &self.m_factors,
            &self.notes,
        ]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![
            &mut self.ec_number,
            &mut self.name,
            &mut self.echa_chem_checked,
            &mut self.reach_tonnage_band,
            &mut self.entries,
            &mut self.url,
            &mut self.cl_type,
            &mut self.joint_entries,
            &mut self.hazard_classes,
            &mut self.hazard_statements,
            &mut self.organs_exposure_route,
            &mut self.labelling_hazard_statements,
            &mut self.labelling_supplementary_statements,
            &mut self.labelling_organs_exposure_route,
            &mut self.specific_concentration_limits,
            &mut self.m_factors,
            &mut self.notes,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdPpp {
    pub presence: Presence,
    pub status: FieldValue,
    pub conclusion_hh: FieldValue,
    pub conclusion_non_to: FieldValue,
    pub conclusion_link: FieldValue,
}

impl SourceNamespace for EdPpp {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![
            &self.status,
            &self.conclusion_hh,
            &self.conclusion_non_to,
            &self.conclusion_link,
        ]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![
            &mut self.status,
            &mut self.conclusion_hh,
            &mut self.conclusion_non_to,
            &mut self.conclusion_link,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bpr {
    pub presence: Presence,
    pub ed_hh: FieldValue,
    pub ed_env: FieldValue,
}

impl SourceNamespace for Bpr {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![&self.ed_hh, &self.ed_env]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![&mut self.ed_hh, &mut self.ed_env]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdAssessment {
    pub presence: Presence,
    pub outcome: FieldValue,
    pub status: FieldValue,
    pub authority: FieldValue,
    pub last_updated: FieldValue,
}

impl SourceNamespace for EdAssessment {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![
            &self.outcome,
            &self.status,
            &self.authority,
            &self.last_updated,
        ]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![
            &mut self.outcome,
            &mut self.status,
            &mut self.authority,
            &mut self.last_updated,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Svhc {
    pub presence: Presence,
    pub reason: FieldValue,
    pub date_inclusion: FieldValue,
    pub decision: FieldValue,
}

impl SourceNamespace for Svhc {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![&self.reason, &self.date_inclusion, &self.decision]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![&mut self.reason, &mut self.date_inclusion, &mut self.decision]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodAdditive {
    pub presence: Presence,
    pub e_number: FieldValue,
}

impl SourceNamespace for FoodAdditive {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![&self.e_number]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![&mut self.e_number]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodFlavourings {
    pub presence: Presence,
    pub fl_number: FieldValue,
}

impl SourceNamespace for FoodFlavourings {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![&self.fl_number]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![&mut self.fl_number]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvhcIntent {
    pub presence: Presence,
    pub status: FieldValue,
    pub scope: FieldValue,
    pub last_updated: FieldValue,
}

impl SourceNamespace for SvhcIntent {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![&self.status, &self.scope, &self.last_updated]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![&mut self.status, &mut self.scope, &mut self.last_updated]
    }
}

/// One PACT process: its state and the link to the activity page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PactProcess {
    pub value: FieldValue,
    pub link: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pact {
    pub presence: Presence,
    pub sev: PactProcess,
    pub dev: PactProcess,
    pub ed: PactProcess,
    pub arn: PactProcess,
    pub pbt: PactProcess,
    pub clh: PactProcess,
    pub svhc: PactProcess,
}

impl Pact {
    /// Processes with their short names, in column order.
    pub fn processes(&self) -> [(&'static str, &PactProcess); 7] {
        [
            ("SEv", &self.sev),
            ("DEv", &self.dev),
            ("ED", &self.ed),
            ("ARN", &self.arn),
            ("PBT", &self.pbt),
            ("CLH", &self.clh),
            ("SVHC", &self.svhc),
        ]
    }
}

impl SourceNamespace for Pact {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        self.processes()
            .into_iter()
            .flat_map(|(_, process)| [&process.value, &process.link])
            .collect()
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        let Self {
            sev,
            dev,
            ed,
            arn,
            pbt,
            clh,
            svhc,
            ..
        } = self;
        [sev, dev, ed, arn, pbt, clh, svhc]
            .into_iter()
            .flat_map(|process| {
                let PactProcess { value, link } = process;
                [value, link]
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corap {
    pub presence: Presence,
    pub initial_grounds: FieldValue,
    pub status: FieldValue,
    pub latest_update: FieldValue,
}

impl SourceNamespace for Corap {
    fn presence(&self) -> Presence {
        self.presence
    }

    fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    fn details(&self) -> Vec<&FieldValue> {
        vec![&self.initial_grounds, &self.status, &self.latest_update]
    }

    fn details_mut(&mut self) -> Vec<&mut FieldValue> {
        vec![
            &mut self.initial_grounds,
            &mut self.status,
            &mut self.latest_update,
        ]
    }
}

/// The consolidated output row for one substance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: usize,
    pub input: String,
    pub cas: FieldValue,
    pub ec: FieldValue,
    pub clp: ClpIdentity,
    pub harmonized_assessment: FieldValue,
    pub self_classified_assessment: FieldValue,
    pub ed_ppp: EdPpp,
    pub bpr: Bpr,
    pub ed_assessment: EdAssessment,
    pub svhc: Svhc,
    pub food_additive: FoodAdditive,
    pub food_flavourings: FoodFlavourings,
    pub svhc_intent: SvhcIntent,
    pub pact: Pact,
    pub corap: Corap,
}

impl Record {
    pub fn new(substance: &Substance) -> Self {
        Self {
            id: substance.id,
            input: substance.input_identifier.clone(),
            cas: substance.cas.clone(),
            ec: substance.ec.clone(),
            clp: ClpIdentity::default(),
            harmonized_assessment: FieldValue::Unset,
            self_classified_assessment: FieldValue::Unset,
            ed_ppp: EdPpp::default(),
            bpr: Bpr::default(),
            ed_assessment: EdAssessment::default(),
            svhc: Svhc::default(),
            food_additive: FoodAdditive::default(),
            food_flavourings: FoodFlavourings::default(),
            svhc_intent: SvhcIntent::default(),
            pact: Pact::default(),
            corap: Corap::default(),
        }
    }

    pub fn namespace(&self, kind: SourceKind) -> &dyn SourceNamespace {
        match kind {
            SourceKind::ClInventory => &self.clp,
            SourceKind::EfsaPpp => &self.ed_ppp,
            SourceKind::Bpr => &self.bpr,
            SourceKind::EdAssessment => &self.ed_assessment,
            SourceKind::Svhc => &self.svhc,
            SourceKind::FoodAdditive => &self.food_additive,
            SourceKind::FoodFlavourings => &self.food_flavourings,
            SourceKind::SvhcIntent => &self.svhc_intent,
            SourceKind::Pact => &self.pact,
            SourceKind::Corap => &self.corap,
        }
    }

    pub fn namespace_mut(&mut self, kind: SourceKind) -> &mut dyn SourceNamespace {
        match kind {
            SourceKind::ClInventory => &mut self.clp,
            SourceKind::EfsaPpp => &mut self.ed_ppp,
            SourceKind::Bpr => &mut self.bpr,
            SourceKind::EdAssessment => &mut self.ed_assessment,
            SourceKind::Svhc => &mut self.svhc,
            SourceKind::FoodAdditive => &mut self.food_additive,
            SourceKind::FoodFlavourings => &mut self.food_flavourings,
            SourceKind::SvhcIntent => &mut self.svhc_intent,
            SourceKind::Pact => &mut self.pact,
            SourceKind::Corap => &mut self.corap,
        }
    }

    /// Output headers in the fixed column order.
    pub fn column_headers() -> Vec<String> {
        let mut headers: Vec<String> = ["id", "Input", "CAS", "EC"]
            .into_iter()
            .map(String::from)
            .collect();
        let clp_fields = SourceKind::ClInventory.detail_fields();
        // Skip `EC number`: it only backfills `EC`.
        for (index, field) in clp_fields.iter().enumerate().skip(1) {
            if index == CLP_PRESENCE_AFTER + 1 {
                headers.push(SourceKind::ClInventory.presence_header());
            }
            headers.push((*field).to_string());
        }
        headers.push(HARMONIZED_HEADER.to_string());
        headers.push(SELF_CLASSIFIED_HEADER.to_string());
        for kind in SourceKind::ALL.into_iter().filter(|kind| !kind.is_identity()) {
            headers.push(kind.presence_header());
            for field in kind.detail_fields() {
                headers.push(kind.detail_header(field));
            }
        }
        headers
    }

    /// Output values, aligned with [`Record::column_headers`].
    pub fn output_values(&self) -> Vec<String> {
        let mut values = vec![
            self.id.to_string(),
            self.input.clone(),
            self.cas.as_output().to_string(),
            self.ec.as_output().to_string(),
        ];
        for (index, field) in self.clp.details().into_iter().enumerate().skip(1) {
            if index == CLP_PRESENCE_AFTER + 1 {
                values.push(self.clp.on_cl.as_output().to_string());
            }
            values.push(field.as_output().to_string());
        }
        values.push(self.harmonized_assessment.as_output().to_string());
        values.push(self.self_classified_assessment.as_output().to_string());
        for kind in SourceKind::ALL.into_iter().filter(|kind| !kind.is_identity()) {
            let namespace = self.namespace(kind);
            values.push(namespace.presence().as_output().to_string());
            for field in namespace.details() {
                values.push(field.as_output().to_string());
            }
        }
        values
    }
}

/// Index of `REACH tonnage band` in the C&L detail fields; `On C&L?` follows it.
const CLP_PRESENCE_AFTER: usize = 3;

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let headers = Self::column_headers();
        let values = self.output_values();
        let mut map = serializer.serialize_map(Some(headers.len()))?;
        for (header, value) in headers.iter().zip(&values) {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}
