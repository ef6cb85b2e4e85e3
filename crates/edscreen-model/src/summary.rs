use serde::Serialize;

/// Condensed cross-source view of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub id: usize,
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "CAS")]
    pub cas: String,
    #[serde(rename = "EC")]
    pub ec: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Hazard classification")]
    pub hazard_classification: String,
    #[serde(rename = "ED status BPR/PPP")]
    pub ed_status: String,
    #[serde(rename = "ED assessment")]
    pub ed_assessment: String,
    #[serde(rename = "SVHC")]
    pub svhc: String,
    #[serde(rename = "CoRAP")]
    pub corap: String,
    #[serde(rename = "PACT")]
    pub pact: String,
    #[serde(rename = "Food")]
    pub food: String,
}

impl SummaryRow {
    pub const HEADERS: [&'static str; 12] = [
        "id",
        "Input",
        "CAS",
        "EC",
        "Name",
        "Hazard classification",
        "ED status BPR/PPP",
        "ED assessment",
        "SVHC",
        "CoRAP",
        "PACT",
        "Food",
    ];

    /// Values aligned with [`SummaryRow::HEADERS`].
    pub fn values(&self) -> [String; 12] {
        [
            self.id.to_string(),
            self.input.clone(),
            self.cas.clone(),
            self.ec.clone(),
            self.name.clone(),
            self.hazard_classification.clone(),
            self.ed_status.clone(),
            self.ed_assessment.clone(),
            self.svhc.clone(),
            self.corap.clone(),
            self.pact.clone(),
            self.food.clone(),
        ]
    }
}
