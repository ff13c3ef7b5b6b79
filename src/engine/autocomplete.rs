//! Autocomplete over the harvested symptom vocabulary.

use crate::config::MAX_SUGGESTIONS;

/// Filter `vocabulary` against a partial phrase.
///
/// Prefix matches come first so short inputs surface the most specific
/// completions; substring-only matches follow. Within each group the
/// vocabulary's sorted order is preserved. At most
/// [`MAX_SUGGESTIONS`] items.
pub fn suggest_from(vocabulary: &[String], partial: &str) -> Vec<String> {
    let term = partial.trim().to_lowercase();
    if term.len() < 2 {
        return Vec::new();
    }

    let mut starts_with = Vec::new();
    let mut contains = Vec::new();

    for symptom in vocabulary {
        if symptom.starts_with(&term) {
            starts_with.push(symptom.clone());
        } else if symptom.contains(&term) {
            contains.push(symptom.clone());
        }
    }

    starts_with.extend(contains);
    starts_with.truncate(MAX_SUGGESTIONS);
    starts_with
}
