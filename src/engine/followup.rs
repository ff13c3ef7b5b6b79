//! Rule-based follow-up question generation.
//!
//! Fixed templates keyed off the ranked results. No learned behavior:
//! duration and severity are always asked when any candidate exists, and a
//! yes/no fever probe is added only when the top candidate mentions fever.

use crate::config::MAX_FOLLOW_UP_QUESTIONS;

use super::types::{AnalysisResult, FollowUpQuestion, QuestionKind};

const DURATION_OPTIONS: &[&str] = &[
    "Less than 24 hours",
    "1-3 days",
    "4-7 days",
    "More than a week",
    "More than a month",
];

const SEVERITY_OPTIONS: &[&str] = &[
    "Mild (barely noticeable)",
    "Moderate (uncomfortable but manageable)",
    "Severe (significantly affecting daily activities)",
];

/// Produce up to [`MAX_FOLLOW_UP_QUESTIONS`] refinement questions for a
/// ranked analysis. Empty results produce no questions.
pub fn generate_follow_up_questions(results: &[AnalysisResult]) -> Vec<FollowUpQuestion> {
    let mut questions = Vec::new();

    let Some(top) = results.first() else {
        return questions;
    };

    questions.push(FollowUpQuestion {
        question: "How long have you been experiencing these symptoms?".to_string(),
        kind: QuestionKind::MultipleChoice,
        options: Some(DURATION_OPTIONS.iter().map(|o| o.to_string()).collect()),
    });

    questions.push(FollowUpQuestion {
        question: "How would you rate the severity of your symptoms?".to_string(),
        kind: QuestionKind::MultipleChoice,
        options: Some(SEVERITY_OPTIONS.iter().map(|o| o.to_string()).collect()),
    });

    if top.condition_name.to_lowercase().contains("fever")
        || top.symptoms.to_lowercase().contains("fever")
    {
        questions.push(FollowUpQuestion {
            question: "Have you experienced a fever?".to_string(),
            kind: QuestionKind::YesNo,
            options: None,
        });
    }

    questions.truncate(MAX_FOLLOW_UP_QUESTIONS);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WHEN_TO_SEE_DOCTOR;

    fn result(name: &str, symptoms: &str) -> AnalysisResult {
        AnalysisResult {
            condition_name: name.into(),
            confidence: 50,
            matching_symptoms: vec![],
            reasoning: String::new(),
            overview: String::new(),
            symptoms: symptoms.into(),
            causes: String::new(),
            causes_summary: vec![],
            risk_factors_summary: vec![],
            diagnosis: String::new(),
            treatment: String::new(),
            home_remedies: String::new(),
            home_remedies_summary: vec![],
            exercises: String::new(),
            exercises_summary: vec![],
            when_to_see_doctor: WHEN_TO_SEE_DOCTOR.into(),
        }
    }

    #[test]
    fn no_results_no_questions() {
        assert!(generate_follow_up_questions(&[]).is_empty());
    }

    #[test]
    fn duration_and_severity_always_asked() {
        let questions = generate_follow_up_questions(&[result("Asthma", "wheezing and cough")]);
        assert_eq!(questions.len(), 2);
        assert!(questions[0].question.contains("How long"));
        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(questions[0].options.as_ref().unwrap().len(), 5);
        assert!(questions[1].question.contains("severity"));
        assert_eq!(questions[1].options.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn fever_probe_when_top_symptoms_mention_fever() {
        let questions =
            generate_follow_up_questions(&[result("Influenza", "* **Fever** and chills.")]);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[2].kind, QuestionKind::YesNo);
        assert!(questions[2].options.is_none());
    }

    #[test]
    fn fever_probe_when_condition_name_mentions_fever() {
        let questions = generate_follow_up_questions(&[result("Scarlet Fever", "rash and chills")]);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn fever_in_lower_ranked_result_does_not_trigger_probe() {
        let results = vec![
            result("Migraine", "headache and nausea"),
            result("Influenza", "fever and chills"),
        ];
        let questions = generate_follow_up_questions(&results);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn never_more_than_three() {
        let questions =
            generate_follow_up_questions(&[result("Hay Fever", "fever-like congestion")]);
        assert!(questions.len() <= MAX_FOLLOW_UP_QUESTIONS);
    }
}
