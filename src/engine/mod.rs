//! The matching engine: vocabulary extraction, autocomplete, prose
//! summarization, weighted symptom scoring, and ranked analysis.

pub mod analyzer;
pub mod autocomplete;
pub mod extract;
pub mod followup;
pub mod scoring;
pub mod summary;
pub mod types;
pub mod vocabulary;

pub use analyzer::*;
pub use extract::extract_symptoms;
pub use followup::generate_follow_up_questions;
pub use scoring::score_symptoms;
pub use summary::extract_summary;
pub use types::*;

use thiserror::Error;

/// Per-query failures. User-correctable, never a system fault.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Please enter at least one symptom")]
    EmptyInput,
}
