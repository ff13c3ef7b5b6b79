//! One-time knowledge base loading.
//!
//! The condition collection ships as a bundled JSON asset compiled into the
//! binary. Loading happens synchronously at startup; any failure here is
//! fatal and must stop the embedding application from serving queries.

use std::fs;
use std::path::Path;

use super::types::KnowledgeBase;
use super::KnowledgeBaseError;

/// The condition collection bundled with the crate.
const BUNDLED_CONDITIONS: &str = include_str!("../../data/conditions.json");

/// Load the bundled condition collection.
pub fn load_bundled() -> Result<KnowledgeBase, KnowledgeBaseError> {
    load_from_str(BUNDLED_CONDITIONS)
}

/// Load a condition collection from a JSON file on disk.
pub fn load_from_path(path: &Path) -> Result<KnowledgeBase, KnowledgeBaseError> {
    let raw = fs::read_to_string(path)?;
    load_from_str(&raw)
}

/// Parse a condition collection from a JSON string.
pub fn load_from_str(raw: &str) -> Result<KnowledgeBase, KnowledgeBaseError> {
    let kb: KnowledgeBase = serde_json::from_str(raw)?;
    if kb.is_empty() {
        return Err(KnowledgeBaseError::Empty);
    }

    tracing::info!(conditions = kb.len(), "knowledge base loaded");
    Ok(kb)
}
