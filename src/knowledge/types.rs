use serde::{Deserialize, Serialize};

/// One disease/disorder entry. Field names mirror the bundled asset schema.
///
/// The seven prose fields are semi-structured text as authored: they may
/// contain markdown-style bold markers (`**text**`), bullet markers
/// (`*`, `-`, `•`), or numbered lists. Downstream parsing of that prose is
/// best-effort, never schema-enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub condition_name: String,
    pub overview: String,
    pub symptoms: String,
    pub causes_and_risk_factors: String,
    pub diagnosis: String,
    pub treatment: String,
    pub home_remedies_and_lifestyle: String,
    pub exercises: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_attribution: Option<String>,
}

/// The full condition collection. Loaded once, read-only for the process
/// lifetime. Iteration order matches the asset and is stable, which keeps
/// equal-confidence ranking ties deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    pub conditions: Vec<ConditionRecord>,
}

impl KnowledgeBase {
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionRecord> {
        self.conditions.iter()
    }
}
