//! Ranked symptom analysis over the full knowledge base.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::{
    CONFIDENCE_FLOOR, EXERCISES_FRAMING, HOME_REMEDIES_FRAMING, MAX_RESULTS, SUMMARY_ITEMS,
    TREATMENT_FRAMING, WHEN_TO_SEE_DOCTOR,
};
use crate::knowledge::{self, ConditionRecord, KnowledgeBase, KnowledgeBaseError};

use super::autocomplete::suggest_from;
use super::scoring::score_symptoms;
use super::summary::extract_summary;
use super::types::AnalysisResult;
use super::vocabulary::build_vocabulary;
use super::AnalyzerError;

/// The matching engine over one loaded knowledge base.
///
/// All query methods are pure reads; the only write-once state is the
/// lazily built vocabulary cache, which lives and dies with this value.
/// Tests construct a fresh engine per knowledge base fixture.
pub struct SymptomEngine {
    kb: KnowledgeBase,
    vocabulary: OnceLock<Vec<String>>,
}

impl SymptomEngine {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            vocabulary: OnceLock::new(),
        }
    }

    /// Engine over the bundled condition collection.
    pub fn bundled() -> Result<Self, KnowledgeBaseError> {
        Ok(Self::new(knowledge::load_bundled()?))
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// The harvested symptom vocabulary, built on first access.
    ///
    /// A race on first access recomputes idempotently inside the
    /// `OnceLock`; the snapshot then holds for this engine's lifetime.
    pub fn vocabulary(&self) -> &[String] {
        self.vocabulary.get_or_init(|| {
            let vocab = build_vocabulary(&self.kb);
            tracing::debug!(phrases = vocab.len(), "symptom vocabulary built");
            vocab
        })
    }

    /// Autocomplete suggestions for a partial symptom phrase. At most 10.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        suggest_from(self.vocabulary(), partial)
    }

    /// Score every condition against the user's symptom text and return the
    /// ranked candidates, best first, at most [`MAX_RESULTS`].
    ///
    /// `previous_answers` carries follow-up answers from an earlier round.
    /// It does not change the scoring; it is accepted so re-analysis calls
    /// share one signature, and is logged for traceability.
    pub fn analyze(
        &self,
        user_symptoms_text: &str,
        previous_answers: Option<&HashMap<String, String>>,
    ) -> Result<Vec<AnalysisResult>, AnalyzerError> {
        let symptom_list: Vec<String> = user_symptoms_text
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if symptom_list.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        if let Some(answers) = previous_answers {
            tracing::debug!(answers = answers.len(), "re-analysis with follow-up answers");
        }

        let mut results: Vec<AnalysisResult> = self
            .kb
            .iter()
            .filter_map(|condition| self.analyze_condition(condition, &symptom_list))
            .collect();

        // sort_by is stable: equal confidences keep knowledge base order.
        results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        results.truncate(MAX_RESULTS);

        tracing::info!(
            symptoms = symptom_list.len(),
            candidates = results.len(),
            "symptom analysis complete"
        );
        Ok(results)
    }

    fn analyze_condition(
        &self,
        condition: &ConditionRecord,
        symptom_list: &[String],
    ) -> Option<AnalysisResult> {
        let confidence = score_symptoms(symptom_list, &condition.symptoms);
        if confidence <= CONFIDENCE_FLOOR {
            return None;
        }

        // Stricter than the scorer on purpose: the displayed list only
        // names unambiguous full-phrase matches.
        let symptom_text = condition.symptoms.to_lowercase();
        let matching_symptoms: Vec<String> = symptom_list
            .iter()
            .filter(|s| symptom_text.contains(&s.to_lowercase()))
            .cloned()
            .collect();

        let reasoning = if matching_symptoms.is_empty() {
            "This condition has symptoms that partially overlap with your description.".to_string()
        } else {
            format!(
                "This condition matches {} of your symptoms: {}.",
                matching_symptoms.len(),
                matching_symptoms.join(", ")
            )
        };

        // Risk factors usually follow a "Risk Factors" heading inside the
        // combined causes field; fall back to the whole field without one.
        let risk_factors_text = condition
            .causes_and_risk_factors
            .splitn(2, "Risk Factors")
            .nth(1)
            .unwrap_or(&condition.causes_and_risk_factors);

        Some(AnalysisResult {
            condition_name: condition.condition_name.clone(),
            confidence,
            matching_symptoms,
            reasoning,
            overview: condition.overview.clone(),
            symptoms: condition.symptoms.clone(),
            causes: condition.causes_and_risk_factors.clone(),
            causes_summary: extract_summary(&condition.causes_and_risk_factors, SUMMARY_ITEMS),
            risk_factors_summary: extract_summary(risk_factors_text, SUMMARY_ITEMS),
            diagnosis: condition.diagnosis.clone(),
            treatment: format!("{TREATMENT_FRAMING}{}", condition.treatment),
            home_remedies: format!(
                "{HOME_REMEDIES_FRAMING}{}",
                condition.home_remedies_and_lifestyle
            ),
            home_remedies_summary: extract_summary(
                &condition.home_remedies_and_lifestyle,
                SUMMARY_ITEMS,
            ),
            exercises: format!("{EXERCISES_FRAMING}{}", condition.exercises),
            exercises_summary: extract_summary(&condition.exercises, SUMMARY_ITEMS),
            when_to_see_doctor: WHEN_TO_SEE_DOCTOR.to_string(),
        })
    }
}
