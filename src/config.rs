//! Runtime configuration
//!
//! Resolution order for every setting: explicit value (CLI flag), then the
//! environment variable, then the built-in default.

use std::path::PathBuf;

use crate::intent::DEFAULT_KB_PATH;
use crate::responder::FALLBACK_MESSAGE;
use crate::session::DEFAULT_EXPORT_PATH;

pub const ENV_KB_PATH: &str = "LEADQUAL_KB";
pub const ENV_EXPORT_PATH: &str = "LEADQUAL_EXPORT";
pub const ENV_FALLBACK: &str = "LEADQUAL_FALLBACK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Knowledge base JSON file
    pub kb_path: PathBuf,
    /// File session summaries are appended to
    pub export_path: PathBuf,
    /// Reply used when no intent matches
    pub fallback_message: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            kb_path: PathBuf::from(DEFAULT_KB_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl BotConfig {
    /// Apply overrides on top of `lookup` (usually the process environment).
    ///
    /// Blank values, explicit or from `lookup`, are treated as unset.
    pub fn resolve(
        kb_path: Option<PathBuf>,
        export_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            kb_path: non_blank_path(kb_path)
                .or_else(|| env(ENV_KB_PATH).map(PathBuf::from))
                .unwrap_or(defaults.kb_path),
            export_path: non_blank_path(export_path)
                .or_else(|| env(ENV_EXPORT_PATH).map(PathBuf::from))
                .unwrap_or(defaults.export_path),
            fallback_message: env(ENV_FALLBACK).unwrap_or(defaults.fallback_message),
        }
    }
}

/// Trim an explicit path; blank means unset. Non UTF-8 paths are kept as given.
fn non_blank_path(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path?;
    match path.to_str() {
        Some(s) if s.trim().is_empty() => None,
        Some(s) => Some(PathBuf::from(s.trim())),
        None => Some(path),
    }
}
