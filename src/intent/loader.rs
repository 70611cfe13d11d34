//! Knowledge base loader
//!
//! Reads the intent list from a JSON array on disk. Declaration order is kept
//! as-is since it is the last tie-break when matching.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::types::Intent;
use crate::error::{LeadQualError, LeadQualResult};

/// Default knowledge base location, relative to the working directory
pub const DEFAULT_KB_PATH: &str = "data/intents.json";

pub struct IntentLoader {
    path: PathBuf,
}

impl IntentLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the knowledge base path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the knowledge base.
    ///
    /// `null` array entries are kept as `None` so indices line up with the
    /// file; the matcher skips them.
    pub fn load(&self) -> LeadQualResult<Vec<Option<Intent>>> {
        let path = self.path.as_path();

        if !path.exists() {
            return Err(LeadQualError::KnowledgeBaseNotFound {
                path: absolute(path),
            });
        }
        if !path.is_file() {
            return Err(LeadQualError::NotAFile {
                path: absolute(path),
            });
        }

        info!("Loading knowledge base from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let intents = parse(&content).map_err(|source| LeadQualError::Json {
            path: absolute(path),
            source,
        })?;

        let missing = intents.iter().filter(|i| i.is_none()).count();
        if missing > 0 {
            warn!("{} null entries in knowledge base will be ignored", missing);
        }
        info!("Loaded {} intents", intents.len() - missing);

        Ok(intents)
    }

    /// Parse a knowledge base held in memory (fixtures, embedded defaults).
    pub fn from_json_str(json: &str) -> LeadQualResult<Vec<Option<Intent>>> {
        parse(json).map_err(|source| LeadQualError::Json {
            path: PathBuf::from("<inline>"),
            source,
        })
    }
}

fn parse(json: &str) -> Result<Vec<Option<Intent>>, serde_json::Error> {
    serde_json::from_str(json)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"[
        {"intent":"orcamento","keywords":["preco","quanto custa"],"response":"Resposta orçamento","priority":10},
        {"intent":"agendamento","keywords":["agendar","horario"],"response":"Resposta agendamento","priority":5}
    ]"#;

    #[test]
    fn test_load_from_file_keeps_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let intents = IntentLoader::new(file.path()).load().unwrap();
        assert_eq!(intents.len(), 2);

        let first = intents[0].as_ref().unwrap();
        assert_eq!(first.name, "orcamento");
        assert_eq!(first.response, "Resposta orçamento");
        assert_eq!(first.priority, 10);
        assert!(first.keywords.iter().any(|k| k == "quanto custa"));

        let second = intents[1].as_ref().unwrap();
        assert_eq!(second.name, "agendamento");
        assert_eq!(second.priority, 5);
    }

    #[test]
    fn test_missing_file() {
        let err = IntentLoader::new("data/does-not-exist.json").load().unwrap_err();
        assert!(matches!(err, LeadQualError::KnowledgeBaseNotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = IntentLoader::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, LeadQualError::NotAFile { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ invalid json").unwrap();

        let err = IntentLoader::new(file.path()).load().unwrap_err();
        assert!(matches!(err, LeadQualError::Json { .. }));
    }

    #[test]
    fn test_null_entries_preserved() {
        let intents =
            IntentLoader::from_json_str(r#"[null, {"intent":"a","keywords":["x"],"response":"r"}]"#)
                .unwrap();
        assert_eq!(intents.len(), 2);
        assert!(intents[0].is_none());
        assert_eq!(intents[1].as_ref().unwrap().priority, 0);
    }

    #[test]
    fn test_null_keyword_phrase_is_skipped() {
        let intents = IntentLoader::from_json_str(
            r#"[{"intent":"a","keywords":["x", null],"response":"r"}]"#,
        )
        .unwrap();
        assert_eq!(intents[0].as_ref().unwrap().keywords, vec!["x"]);
    }

    #[test]
    fn test_null_scalar_fields_use_defaults() {
        let intents = IntentLoader::from_json_str(
            r#"[
                {"intent":null,"keywords":["x"],"response":"r"},
                {"intent":"b","keywords":["y"],"response":null,"priority":null}
            ]"#,
        )
        .unwrap();
        let first = intents[0].as_ref().unwrap();
        assert_eq!(first.name, "");
        assert_eq!(first.keywords, vec!["x"]);

        let second = intents[1].as_ref().unwrap();
        assert_eq!(second.name, "b");
        assert_eq!(second.response, "");
        assert_eq!(second.priority, 0);
    }

    #[test]
    fn test_null_keyword_loaded_file_still_matches() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"intent":"a","keywords":[null,"quanto custa"],"response":"r","priority":null}]"#)
            .unwrap();

        let loader = IntentLoader::new(file.path());
        assert_eq!(loader.path(), file.path());
        let intents = loader.load().unwrap();
        let best = crate::intent::find_best_intent("quanto custa?", &intents).unwrap();
        assert_eq!(best.name, "a");
    }

    #[test]
    fn test_empty_array() {
        assert!(IntentLoader::from_json_str("[]").unwrap().is_empty());
    }
}
