//! Intent knowledge base and keyword matching.

pub mod loader;
pub mod matcher;
pub mod types;

pub use loader::{IntentLoader, DEFAULT_KB_PATH};
pub use matcher::{count_occurrences, find_best_intent, tokenize, IntentMatcher};
pub use types::{Intent, IntentScore, MatchOutcome};
