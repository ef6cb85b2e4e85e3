//! Condensed cross-source view of the merged records.

use edscreen_model::{FieldValue, PLACEHOLDER, Presence, Record, SummaryRow};

fn output(value: &FieldValue) -> String {
    value.as_output().to_string()
}

fn hazard_classification(record: &Record) -> String {
    if let Some(category) = record.harmonized_assessment.non_empty() {
        format!("{category} (harmonised)")
    } else if let Some(category) = record.self_classified_assessment.non_empty() {
        format!("{category} (self-classified)")
    } else {
        PLACEHOLDER.to_string()
    }
}

fn ed_status(record: &Record) -> String {
    let bpr = &record.bpr;
    let mut text = format!("BPR: {}", bpr.presence.as_output());
    if bpr.presence.is_yes() {
        text.push_str(&format!(
            " (HH: {}; ENV: {})",
            bpr.ed_hh.as_output(),
            bpr.ed_env.as_output()
        ));
    }
    let ppp = &record.ed_ppp;
    text.push_str(&format!("; PPP: {}", ppp.presence.as_output()));
    if ppp.presence.is_yes() {
        text.push_str(&format!(
            " (HH: {}; non-TO: {})",
            ppp.conclusion_hh.as_output(),
            ppp.conclusion_non_to.as_output()
        ));
    }
    text
}

fn ed_assessment(record: &Record) -> String {
    let assessment = &record.ed_assessment;
    match (assessment.outcome.non_empty(), assessment.authority.non_empty()) {
        (Some(outcome), Some(authority)) => format!("{outcome} ({authority})"),
        (Some(outcome), None) => outcome.to_string(),
        (None, _) => PLACEHOLDER.to_string(),
    }
}

fn answered_no(presences: &[Presence]) -> bool {
    presences.iter().any(|presence| *presence == Presence::No)
}

fn svhc(record: &Record) -> String {
    if record.svhc.presence.is_yes() {
        format!("Candidate list ({})", record.svhc.reason.as_output())
    } else if record.svhc_intent.presence.is_yes() {
        format!("Intention ({})", record.svhc_intent.status.as_output())
    } else if answered_no(&[record.svhc.presence, record.svhc_intent.presence]) {
        "No".to_string()
    } else {
        PLACEHOLDER.to_string()
    }
}

fn corap(record: &Record) -> String {
    let corap = &record.corap;
    if corap.presence.is_yes() {
        format!(
            "{} ({})",
            corap.status.as_output(),
            corap.initial_grounds.as_output()
        )
    } else {
        corap.presence.as_output().to_string()
    }
}

fn pact(record: &Record) -> String {
    let pact = &record.pact;
    if !pact.presence.is_yes() {
        return pact.presence.as_output().to_string();
    }
    let active: Vec<&str> = pact
        .processes()
        .into_iter()
        .filter(|(_, process)| process.value.non_empty().is_some())
        .map(|(name, _)| name)
        .collect();
    if active.is_empty() {
        "Yes".to_string()
    } else {
        active.join("; ")
    }
}

fn food(record: &Record) -> String {
    let mut parts = Vec::new();
    if record.food_additive.presence.is_yes() {
        parts.push(format!("E number {}", record.food_additive.e_number.as_output()));
    }
    if record.food_flavourings.presence.is_yes() {
        parts.push(format!("FL {}", record.food_flavourings.fl_number.as_output()));
    }
    if !parts.is_empty() {
        parts.join("; ")
    } else if answered_no(&[
        record.food_additive.presence,
        record.food_flavourings.presence,
    ]) {
        "No".to_string()
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Builds the summary row of one record. Reads the record only.
pub fn project_summary(record: &Record) -> SummaryRow {
    SummaryRow {
        id: record.id,
        input: record.input.clone(),
        cas: output(&record.cas),
        ec: output(&record.ec),
        name: output(&record.clp.name),
        hazard_classification: hazard_classification(record),
        ed_status: ed_status(record),
        ed_assessment: ed_assessment(record),
        svhc: svhc(record),
        corap: corap(record),
        pact: pact(record),
        food: food(record),
    }
}

pub fn project_summaries(records: &[Record]) -> Vec<SummaryRow> {
    records.iter().map(project_summary).collect()
}

#[cfg(test)]
mod tests {
    use edscreen_model::Substance;
    use insta::assert_snapshot;

    use super::*;

    fn record() -> Record {
        Record::new(&Substance::new(1, "100-51-6").unwrap())
    }

    #[test]
    fn untouched_record_summarises_to_placeholders() {
        let row = project_summary(&record());
        assert_eq!(row.hazard_classification, "-");
        assert_eq!(row.ed_status, "BPR: -; PPP: -");
        assert_eq!(row.ed_assessment, "-");
        assert_eq!(row.svhc, "-");
        assert_eq!(row.corap, "-");
        assert_eq!(row.pact, "-");
        assert_eq!(row.food, "-");
    }

    #[test]
    fn ed_status_details_only_when_listed() {
        let mut record = record();
        record.bpr.presence = Presence::Yes;
        record.bpr.ed_hh.set("ED");
        record.bpr.ed_env.set("not ED");
        record.ed_ppp.presence = Presence::No;
        assert_snapshot!(ed_status(&record), @"BPR: Yes (HH: ED; ENV: not ED); PPP: No");
    }

    #[test]
    fn ed_assessment_adds_authority_when_present() {
        let mut record = record();
        record.ed_assessment.presence = Presence::Yes;
        record.ed_assessment.outcome.set("ED HH");
        record.ed_assessment.authority.set("");
        assert_eq!(ed_assessment(&record), "ED HH");
        record.ed_assessment.authority.set("France");
        assert_eq!(ed_assessment(&record), "ED HH (France)");
    }

    #[test]
    fn ed_assessment_skips_empty_outcome() {
        let mut record = record();
        record.ed_assessment.presence = Presence::Yes;
        record.ed_assessment.outcome.set("");
        record.ed_assessment.authority.set("");
        assert_eq!(ed_assessment(&record), "-");
        record.ed_assessment.authority.set("France");
        assert_eq!(ed_assessment(&record), "-");
    }

    #[test]
    fn svhc_prefers_candidate_list() {
        let mut record = record();
        record.svhc.presence = Presence::No;
        record.svhc_intent.presence = Presence::Yes;
        record.svhc_intent.status.set("Submitted");
        assert_eq!(svhc(&record), "Intention (Submitted)");
        record.svhc.presence = Presence::Yes;
        record.svhc.reason.set("Toxic for reproduction");
        assert_eq!(svhc(&record), "Candidate list (Toxic for reproduction)");
        record.svhc.presence = Presence::No;
        record.svhc_intent.presence = Presence::Undetermined;
        assert_eq!(svhc(&record), "No");
    }

    #[test]
    fn pact_lists_populated_processes() {
        let mut record = record();
        record.pact.presence = Presence::Yes;
        for process in [
            &mut record.pact.sev,
            &mut record.pact.dev,
            &mut record.pact.ed,
            &mut record.pact.arn,
            &mut record.pact.pbt,
            &mut record.pact.clh,
            &mut record.pact.svhc,
        ] {
            process.value.set("");
            process.link.set("");
        }
        assert_eq!(pact(&record), "Yes");
        record.pact.ed.value.set("Under development");
        record.pact.clh.value.set("Intention");
        assert_snapshot!(pact(&record), @"ED; CLH");
    }

    #[test]
    fn food_joins_both_lists() {
        let mut record = record();
        record.food_additive.presence = Presence::Yes;
        record.food_additive.e_number.set("E 1519");
        record.food_flavourings.presence = Presence::Yes;
        record.food_flavourings.fl_number.set("02.010");
        assert_snapshot!(food(&record), @"E number E 1519; FL 02.010");
        record.food_additive.presence = Presence::No;
        record.food_flavourings.presence = Presence::Undetermined;
        assert_eq!(food(&record), "No");
    }

    #[test]
    fn hazard_classification_marks_regime() {
        let mut record = record();
        record.self_classified_assessment.set("acute toxicity");
        assert_eq!(
            hazard_classification(&record),
            "acute toxicity (self-classified)"
        );
        record.harmonized_assessment.set("carcinogenicity");
        assert_eq!(
            hazard_classification(&record),
            "carcinogenicity (harmonised)"
        );
    }
}
