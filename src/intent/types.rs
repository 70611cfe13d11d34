//! Intent types for the knowledge base and match diagnostics.

use serde::{Deserialize, Serialize};

/// One entry of the knowledge base.
///
/// Built once at load time and only borrowed afterwards; matching never
/// mutates or retains it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    /// Identifier, serialized as `"intent"` in the knowledge base JSON
    #[serde(rename = "intent", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Keyword phrases, in declaration order
    #[serde(default, deserialize_with = "keywords_skip_null")]
    pub keywords: Vec<String>,
    /// Text shown to the user when this intent wins
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: String,
    /// Tie-break weight; higher wins on equal score
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i32,
}

impl Intent {
    pub fn new(
        name: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        response: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            response: response.into(),
            priority,
        }
    }
}

/// A JSON `null` is treated the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `"keywords": null` is an empty list; `null` phrases inside it contribute nothing.
fn keywords_skip_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let phrases: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(phrases.into_iter().flatten().flatten().collect())
}

/// Score of a single intent for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentScore {
    /// Position in the knowledge base (declaration order)
    pub index: usize,
    pub name: String,
    pub score: u32,
    pub priority: i32,
}

/// Result of evaluating a message against the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// An intent scored above zero and won the ranking
    Matched { index: usize, score: u32 },
    /// Nothing scored; callers respond with their fallback
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Knowledge base index of the winner, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Matched { index, .. } => Some(*index),
            Self::NoMatch => None,
        }
    }
}
