//! Static medical knowledge base: condition records and the loader
//! that reads them into memory once at startup.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

use thiserror::Error;

/// Failures while loading the knowledge base. All of these are fatal at
/// startup: the engine cannot serve queries without a parsed knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("I/O error reading knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("Knowledge base parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Knowledge base contains no conditions")]
    Empty,
}
