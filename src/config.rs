/// Crate-level constants
pub const ENGINE_NAME: &str = "symcheck";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of ranked conditions returned by an analysis.
pub const MAX_RESULTS: usize = 8;

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 10;

/// Maximum number of follow-up questions per analysis.
pub const MAX_FOLLOW_UP_QUESTIONS: usize = 3;

/// Maximum number of symptom phrases extracted from free text.
pub const MAX_EXTRACTED_SYMPTOMS: usize = 10;

/// Confidence is capped here so results never read as near-certain.
/// Product policy. Do not raise to 100.
pub const CONFIDENCE_CAP: u8 = 95;

/// Results at or below this confidence are treated as noise and dropped.
pub const CONFIDENCE_FLOOR: u8 = 10;

/// Number of items requested per derived summary list.
pub const SUMMARY_ITEMS: usize = 4;

/// Advisory attached to every analysis result, identical across conditions.
pub const WHEN_TO_SEE_DOCTOR: &str = "Consult a healthcare provider if: symptoms persist or worsen, \
    you experience severe pain, you have difficulty breathing, you notice unusual swelling or \
    bleeding, or if you are concerned about your symptoms. Seek immediate medical attention for \
    severe or life-threatening symptoms.";

/// Framing prepended to the pass-through treatment text.
pub const TREATMENT_FRAMING: &str = "Consult your doctor for proper diagnosis and treatment. ";

/// Framing prepended to the pass-through home remedies text.
pub const HOME_REMEDIES_FRAMING: &str =
    "While consulting a doctor is important, these approaches may help: ";

/// Framing prepended to the pass-through exercises text.
pub const EXERCISES_FRAMING: &str =
    "After consulting your healthcare provider, consider these activities: ";

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "symcheck=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_floor_below_cap() {
        assert!(CONFIDENCE_FLOOR < CONFIDENCE_CAP);
        assert!(CONFIDENCE_CAP < 100);
    }

    #[test]
    fn engine_version_matches_cargo() {
        assert_eq!(ENGINE_VERSION, "0.3.0");
    }
}
