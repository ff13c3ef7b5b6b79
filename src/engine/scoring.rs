//! Weighted partial-credit symptom scoring.

use crate::config::CONFIDENCE_CAP;

/// Score user symptom phrases against one condition's symptom prose.
///
/// Each phrase contributes to a weighted ratio:
/// - full phrase found as a substring: +2 matched at weight 2
/// - no full match but constituent words (>3 chars) found: +0.5 per word
///   at weight 1
/// - nothing found: weight 2 with no credit, so confident misses drag the
///   score down in proportion to how many symptoms were checked
///
/// Returns a percentage in `[0, CONFIDENCE_CAP]`. Empty input scores 0.
pub fn score_symptoms(user_symptoms: &[String], condition_symptom_text: &str) -> u8 {
    let text = condition_symptom_text.to_lowercase();
    let mut match_count = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for symptom in user_symptoms {
        let phrase = symptom.to_lowercase();

        if text.contains(&phrase) {
            match_count += 2.0;
            total_weight += 2.0;
            continue;
        }

        let word_matches = phrase
            .split_whitespace()
            .filter(|word| word.len() > 3 && text.contains(*word))
            .count();

        if word_matches > 0 {
            match_count += word_matches as f64 * 0.5;
            total_weight += 1.0;
        } else {
            total_weight += 2.0;
        }
    }

    if total_weight == 0.0 {
        return 0;
    }

    let percentage = (match_count / total_weight * 100.0).round();
    percentage.min(f64::from(CONFIDENCE_CAP)) as u8
}
