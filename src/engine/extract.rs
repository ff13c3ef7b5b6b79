//! Free-text symptom splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_EXTRACTED_SYMPTOMS;

/// Phrase delimiters: punctuation plus the connectives "and"/"with".
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;.!?]|\sand\s|\swith\s").expect("valid regex"));

/// Split natural-language input into candidate symptom phrases.
///
/// Purely lexical: no synonym handling or spelling correction. Pieces of 2
/// characters or fewer are dropped; at most [`MAX_EXTRACTED_SYMPTOMS`]
/// phrases are returned, in input order.
pub fn extract_symptoms(user_input: &str) -> Vec<String> {
    let mut symptoms: Vec<String> = DELIMITERS
        .split(user_input)
        .map(str::trim)
        .filter(|piece| piece.len() > 2)
        .map(str::to_string)
        .collect();

    symptoms.truncate(MAX_EXTRACTED_SYMPTOMS);
    symptoms
}
