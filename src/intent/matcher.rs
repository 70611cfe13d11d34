//! Keyword Intent Matcher
//!
//! Scores every intent of the knowledge base against a user message and picks
//! the winner. Pure: no side effects, no state kept between calls.
//!
//! ## Scoring
//!
//! 1. Message and keyword phrases go through the same pipeline:
//!    [`normalize`], then every char outside `[a-z0-9]` becomes a separator.
//! 2. Each keyword phrase is a token sequence of length `k`. A window of
//!    width `k` slides over the message tokens; a full match counts once and
//!    jumps `k` positions, a miss moves one position.
//! 3. An intent's score is the sum over its phrases. Zero never wins.
//!
//! ## Ranking
//!
//! `(score, priority)` compared lexicographically, scanning in declaration
//! order. Only a strictly greater key replaces the current best, so exact
//! ties go to the intent declared first.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::types::{Intent, IntentScore, MatchOutcome};
use crate::normalize::normalize;

/// Split text into matching tokens: maximal runs of `[a-z0-9]` after
/// normalization.
///
/// ```
/// use leadqual_bot::intent::tokenize;
///
/// assert_eq!(tokenize("Quanto CUSTA? R$10,00"), vec!["quanto", "custa", "r", "10", "00"]);
/// assert!(tokenize("  !!! ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    normalized
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count non-overlapping occurrences of `keyword` inside `message`.
///
/// ```
/// use leadqual_bot::intent::count_occurrences;
///
/// let msg = ["falar", "com", "humano", "agora"].map(String::from);
/// let kw = ["falar", "com", "humano"].map(String::from);
/// assert_eq!(count_occurrences(&msg, &kw), 1);
/// ```
pub fn count_occurrences(message: &[String], keyword: &[String]) -> u32 {
    let m = message.len();
    let k = keyword.len();

    if k == 0 || k > m {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;

    while i <= m - k {
        if message[i..i + k] == *keyword {
            count += 1;
            i += k;
        } else {
            i += 1;
        }
    }

    count
}

/// Ranking key: compared as `(score, priority)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey {
    score: u32,
    priority: i32,
}

/// Stateless keyword matcher.
///
/// Holds no data, so one value can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentMatcher;

impl IntentMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score one intent against already-tokenized message text.
    pub fn score(&self, message_tokens: &[String], intent: &Intent) -> u32 {
        if message_tokens.is_empty() || intent.keywords.is_empty() {
            return 0;
        }

        intent
            .keywords
            .iter()
            .map(|keyword| count_occurrences(message_tokens, &tokenize(keyword)))
            .sum()
    }

    /// Score every present intent, in declaration order.
    ///
    /// Absent entries are skipped; indices still refer to positions in
    /// `intents`.
    pub fn rank(&self, message: &str, intents: &[Option<Intent>]) -> Vec<IntentScore> {
        let tokens = tokenize(message);

        intents
            .iter()
            .enumerate()
            .filter_map(|(index, intent)| intent.as_ref().map(|i| (index, i)))
            .map(|(index, intent)| IntentScore {
                index,
                name: intent.name.clone(),
                score: self.score(&tokens, intent),
                priority: intent.priority,
            })
            .collect()
    }

    /// Evaluate a message and report which index won, if any.
    pub fn evaluate(&self, message: &str, intents: &[Option<Intent>]) -> MatchOutcome {
        self.select(message, intents.iter().map(Option::as_ref))
    }

    /// Find the best intent for `message`.
    ///
    /// Returns `None` when the knowledge base is empty or nothing scored.
    /// This is the normal "use the fallback" signal, not an error.
    pub fn find_best_intent<'a>(
        &self,
        message: &str,
        intents: &'a [Option<Intent>],
    ) -> Option<&'a Intent> {
        let index = self.evaluate(message, intents).index()?;
        intents.get(index).and_then(Option::as_ref)
    }

    /// Same as [`Self::find_best_intent`] for a knowledge base without
    /// absent entries.
    pub fn find_best_intent_in<'a>(
        &self,
        message: &str,
        intents: &'a [Intent],
    ) -> Option<&'a Intent> {
        let index = self.select(message, intents.iter().map(Some)).index()?;
        intents.get(index)
    }

    fn select<'a, I>(&self, message: &str, intents: I) -> MatchOutcome
    where
        I: IntoIterator<Item = Option<&'a Intent>>,
    {
        let tokens = tokenize(message);
        debug!(message_tokens = tokens.len(), "matching message");

        if tokens.is_empty() {
            return MatchOutcome::NoMatch;
        }

        let mut best: Option<(usize, RankKey)> = None;

        for (index, intent) in intents.into_iter().enumerate() {
            let Some(intent) = intent else {
                continue;
            };

            let score = self.score(&tokens, intent);
            trace!(intent = %intent.name, score, priority = intent.priority, "scored intent");
            if score == 0 {
                continue;
            }

            let key = RankKey {
                score,
                priority: intent.priority,
            };

            let replaces = match &best {
                None => true,
                Some((_, best_key)) => key.cmp(best_key) == Ordering::Greater,
            };
            if replaces {
                best = Some((index, key));
            }
        }

        match best {
            Some((index, key)) => {
                debug!(index, score = key.score, "intent selected");
                MatchOutcome::Matched {
                    index,
                    score: key.score,
                }
            }
            None => {
                debug!("no intent matched");
                MatchOutcome::NoMatch
            }
        }
    }
}

/// Find the best intent using a default [`IntentMatcher`].
pub fn find_best_intent<'a>(message: &str, intents: &'a [Option<Intent>]) -> Option<&'a Intent> {
    IntentMatcher::new().find_best_intent(message, intents)
}
