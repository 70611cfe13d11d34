//! Text normalization for keyword matching
//!
//! Folds user input and keyword phrases into one comparable form:
//! - Lowercase conversion (Unicode default, no locale tailoring)
//! - Canonical decomposition (NFD) with combining marks dropped
//! - Whitespace collapsing and trimming
//!
//! Everything else (punctuation, symbols, emoji) passes through untouched;
//! the tokenizer in [`crate::intent::matcher`] decides what counts as a token.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for matching.
///
/// Never fails; empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use leadqual_bot::normalize::normalize;
///
/// assert_eq!(normalize("  Quero   ORÇAMENTO\t"), "quero orcamento");
/// assert_eq!(normalize("Ação"), "acao");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Fold case first; marks produced by the fold (e.g. 'İ') are dropped too
    let folded: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize optional text; absent input behaves like an empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_has_no_edge_or_double_whitespace(s in "[ \\ta-zA-ZÀ-ÿ\\n]{0,40}") {
            let out = normalize(&s);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.contains('\t') && !out.contains('\n'));
        }
    }
}
