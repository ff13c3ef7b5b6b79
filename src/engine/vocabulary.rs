//! Symptom vocabulary harvesting.
//!
//! Scans every condition's `symptoms` prose for phrases written in the
//! asset's common list styles and merges them with a curated baseline list.
//! The patterns are a best-effort heuristic over free text; the baseline
//! list guarantees autocomplete recall even when a condition's prose
//! matches none of them.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::knowledge::KnowledgeBase;

/// Phrases shorter than this are noise (articles, stray words).
const MIN_PHRASE_LEN: usize = 4;

/// Phrases at this length or longer are whole sentences, not symptoms.
const MAX_PHRASE_LEN: usize = 99;

/// Bullet item with a bold phrase: `* **phrase**`.
static BOLD_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\s+\*\*([^*]+)\*\*").expect("valid regex"));

/// Numbered item with a bold phrase: `1. **phrase**`.
static NUMBERED_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+\*\*([^*]+)\*\*").expect("valid regex"));

/// Line-leading plain bullet: `- phrase` or `• phrase`.
static PLAIN_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-•]\s*(.+)$").expect("valid regex"));

/// Parenthetical asides inside a captured phrase.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

/// Baseline general symptoms, merged into every vocabulary regardless of
/// what the extraction patterns find.
const COMMON_SYMPTOMS: &[&str] = &[
    "headache", "fever", "fatigue", "nausea", "vomiting", "diarrhea",
    "cough", "sore throat", "runny nose", "chest pain", "shortness of breath",
    "dizziness", "abdominal pain", "back pain", "muscle pain", "joint pain",
    "rash", "itching", "swelling", "numbness", "tingling", "weakness",
    "blurred vision", "ear pain", "difficulty swallowing", "loss of appetite",
    "weight loss", "weight gain", "insomnia", "anxiety", "depression",
    "confusion", "memory loss", "difficulty concentrating", "night sweats",
    "chills", "rapid heartbeat", "irregular heartbeat", "high blood pressure",
    "low blood pressure", "painful urination", "frequent urination",
    "blood in urine", "constipation", "bloating", "heartburn", "acid reflux",
];

/// Harvest the sorted, deduplicated symptom vocabulary from a knowledge base.
///
/// Pure and deterministic; callers cache the result (see
/// [`crate::SymptomEngine::vocabulary`]).
pub fn build_vocabulary(kb: &KnowledgeBase) -> Vec<String> {
    let mut phrases = BTreeSet::new();

    for condition in kb.iter() {
        let text = condition.symptoms.to_lowercase();

        for pattern in [&*BOLD_BULLET, &*NUMBERED_BOLD, &*PLAIN_BULLET] {
            for capture in pattern.captures_iter(&text) {
                if let Some(phrase) = clean_phrase(&capture[1]) {
                    phrases.insert(phrase);
                }
            }
        }
    }

    for symptom in COMMON_SYMPTOMS {
        phrases.insert((*symptom).to_string());
    }

    phrases.into_iter().collect()
}

/// Normalize one captured phrase: drop parenthetical asides, truncate at the
/// first clause punctuation, trim. Returns `None` when the remainder is out
/// of bounds.
fn clean_phrase(raw: &str) -> Option<String> {
    let without_parens = PARENTHETICAL.replace_all(raw, "");
    let head = without_parens
        .split([':', ';', ',', '.'])
        .next()
        .unwrap_or("")
        .trim();

    if (MIN_PHRASE_LEN..=MAX_PHRASE_LEN).contains(&head.len()) {
        Some(head.to_string())
    } else {
        None
    }
}
