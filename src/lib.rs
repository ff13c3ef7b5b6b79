//! symcheck — local symptom-to-condition matching.
//!
//! Scores free-text symptom phrases against a static medical knowledge
//! base, ranks candidate conditions, and condenses their prose fields into
//! short display summaries. Deterministic and fully offline; the remote
//! LLM-backed alternative path lives with the embedding application, not
//! here.

pub mod config;
pub mod engine;
pub mod knowledge;

pub use engine::{
    extract_symptoms, generate_follow_up_questions, AnalysisResult, AnalyzerError,
    FollowUpQuestion, QuestionKind, SymptomEngine,
};
pub use knowledge::{ConditionRecord, KnowledgeBase, KnowledgeBaseError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedding applications that have no subscriber
/// of their own. Honors `RUST_LOG`, falling back to the crate default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
