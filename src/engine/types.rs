use serde::{Deserialize, Serialize};

/// One ranked condition candidate for a symptom query.
///
/// Created per query and handed to the caller; never persisted.
/// `matching_symptoms` is a subset of the user's input phrases, not of the
/// condition's own vocabulary, so the UI can echo the user's wording back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub condition_name: String,
    /// Lexical overlap strength in [0, 95], not a calibrated probability.
    pub confidence: u8,
    pub matching_symptoms: Vec<String>,
    pub reasoning: String,

    pub overview: String,
    pub symptoms: String,
    pub causes: String,
    pub causes_summary: Vec<String>,
    pub risk_factors_summary: Vec<String>,
    pub diagnosis: String,
    pub treatment: String,
    pub home_remedies: String,
    pub home_remedies_summary: Vec<String>,
    pub exercises: String,
    pub exercises_summary: Vec<String>,
    pub when_to_see_doctor: String,
}

/// How a follow-up question expects to be answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    YesNo,
    Text,
}

/// A rule-generated question refining a prior analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub question: String,
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}
