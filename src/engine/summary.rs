//! Bounded summary extraction from semi-structured prose.
//!
//! Two-phase heuristic: bold bullet items first, then a sentence-split
//! fallback when the prose isn't written in bullet style. Both phases are
//! deterministic over the same input.

use std::sync::LazyLock;

use regex::Regex;

/// Line-leading bullet with a bold phrase: `* **phrase**`, `- **phrase**`,
/// or `• **phrase**`.
static BOLD_BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[*•\-]\s+\*\*([^*]+)\*\*").expect("valid regex"));

/// Sentence boundaries for the fallback phase.
static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Extract up to `count` short display items from a prose block.
///
/// Phase 1 keeps bold bullet phrases between 6 and 149 characters, truncated
/// at the first clause punctuation. Phase 2 tops up from plain sentences
/// (bold markers stripped, duplicates skipped) between 11 and 149 characters.
pub fn extract_summary(text: &str, count: usize) -> Vec<String> {
    let mut items = Vec::new();

    for capture in BOLD_BULLET_ITEM.captures_iter(text) {
        let item = capture[1]
            .split([':', ';', '.'])
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        if item.len() > 5 && item.len() < 150 {
            items.push(item);
        }
        if items.len() >= count {
            break;
        }
    }

    if items.len() < count {
        for sentence in SENTENCE_SPLIT.split(text) {
            let clean = sentence.replace("**", "").trim().to_string();
            if clean.len() > 10 && clean.len() < 150 && !items.contains(&clean) {
                items.push(clean);
            }
            if items.len() >= count {
                break;
            }
        }
    }

    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_bullets_extracted_in_order() {
        let text = "Common causes:\n* **Hormonal changes**: estrogen swings.\n* **Stress**: emotional strain.\n* **Sleep disruption** of any kind.";
        let items = extract_summary(text, 5);
        assert_eq!(
            items,
            vec!["Hormonal changes", "Stress", "Sleep disruption"]
        );
    }

    #[test]
    fn truncates_at_clause_punctuation() {
        let text = "* **Dietary triggers: cheese and alcohol**";
        let items = extract_summary(text, 5);
        assert_eq!(items[0], "Dietary triggers");
    }

    #[test]
    fn sentence_fallback_when_no_bullets() {
        let text = "Rest in a dark quiet room. Drink plenty of fluids throughout the day! Short.";
        let items = extract_summary(text, 3);
        assert!(items.contains(&"Rest in a dark quiet room".to_string()));
        assert!(items.contains(&"Drink plenty of fluids throughout the day".to_string()));
        // "Short." is 6 chars after the terminator split, below the fallback floor.
        assert!(!items.iter().any(|i| i.starts_with("Short")));
    }

    #[test]
    fn fallback_tops_up_after_bullets() {
        let text = "* **Cold compress** on the forehead.\nKeeping a regular sleep schedule also helps considerably.";
        let items = extract_summary(text, 3);
        assert_eq!(items[0], "Cold compress");
        assert!(items.len() > 1);
    }

    #[test]
    fn fallback_strips_bold_markers_and_dedupes() {
        let text = "Regular **gentle** movement eases stiffness. Regular gentle movement eases stiffness. It also improves mood over time.";
        let items = extract_summary(text, 5);
        assert_eq!(
            items,
            vec![
                "Regular gentle movement eases stiffness".to_string(),
                "It also improves mood over time.".to_string(),
            ]
        );
    }

    #[test]
    fn bounded_count_and_item_length() {
        let text = "* **First item here**\n* **Second item here**\n* **Third item here**\n* **Fourth item here**\n* **Fifth item here**\n* **Sixth item here**";
        let items = extract_summary(text, 4);
        assert_eq!(items.len(), 4);
        for item in &items {
            assert!(item.len() > 5 && item.len() < 150);
        }
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_summary("", 5).is_empty());
    }

    #[test]
    fn deterministic() {
        let text = "* **Hydration** matters. Sleep on a fixed schedule every night.";
        assert_eq!(extract_summary(text, 4), extract_summary(text, 4));
    }
}
