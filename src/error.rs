//! Error handling for the knowledge base and session layers
//!
//! The matching core never fails: degenerate input resolves to "no match".
//! These errors cover the file-backed collaborators around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for loading and configuration
#[derive(Error, Debug)]
pub enum LeadQualError {
    #[error("knowledge base file not found: {}", path.display())]
    KnowledgeBaseNotFound { path: PathBuf },

    #[error("knowledge base path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to load knowledge base JSON: {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type LeadQualResult<T> = Result<T, LeadQualError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = LeadQualError::KnowledgeBaseNotFound {
            path: PathBuf::from("data/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("data/missing.json"));
    }

    #[test]
    fn test_json_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{ invalid").unwrap_err();
        let err = LeadQualError::Json {
            path: PathBuf::from("kb.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to load knowledge base JSON"));
    }
}
