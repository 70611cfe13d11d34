//! Response decision: turns a match into the text shown to the user.

use serde::Serialize;

use crate::intent::{Intent, IntentMatcher};

/// Default reply when nothing in the knowledge base matches
pub const FALLBACK_MESSAGE: &str =
    "Desculpe, não entendi. Você pode reformular ou digitar /ajuda para ver as opções.";

/// What the bot answers, and which intent (if any) produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub response: String,
    pub intent: Option<String>,
}

impl Decision {
    pub fn is_fallback(&self) -> bool {
        self.intent.is_none()
    }
}

/// Pick the response for a user message.
///
/// Blank or absent messages, and messages with no matching intent, get the
/// fallback text.
pub fn decide_response(
    message: Option<&str>,
    intents: &[Option<Intent>],
    matcher: &IntentMatcher,
    fallback: &str,
) -> Decision {
    let fallback_decision = || Decision {
        response: fallback.to_string(),
        intent: None,
    };

    let message = match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return fallback_decision(),
    };

    match matcher.find_best_intent(message, intents) {
        Some(intent) => Decision {
            response: intent.response.clone(),
            intent: Some(intent.name.clone()),
        },
        None => fallback_decision(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = FALLBACK_MESSAGE;

    fn test_intents() -> Vec<Option<Intent>> {
        vec![
            Some(Intent::new(
                "orcamento",
                ["preco", "valor", "quanto custa", "orcamento"],
                "Resposta sobre orçamento",
                10,
            )),
            Some(Intent::new(
                "agendamento",
                ["agendar", "marcar", "horario"],
                "Resposta sobre agendamento",
                10,
            )),
        ]
    }

    fn respond(message: Option<&str>) -> Decision {
        decide_response(message, &test_intents(), &IntentMatcher::new(), FALLBACK)
    }

    #[test]
    fn test_matching_intent_response() {
        let decision = respond(Some("quanto custa"));
        assert_eq!(decision.response, "Resposta sobre orçamento");
        assert_eq!(decision.intent.as_deref(), Some("orcamento"));
        assert!(!decision.is_fallback());
    }

    #[test]
    fn test_no_match_falls_back() {
        let decision = respond(Some("xyzabc123"));
        assert_eq!(decision.response, FALLBACK);
        assert!(decision.is_fallback());
    }

    #[test]
    fn test_null_or_blank_falls_back() {
        for message in [None, Some(""), Some("   "), Some("\t"), Some("\n"), Some(" \t ")] {
            assert_eq!(respond(message).response, FALLBACK, "message: {:?}", message);
        }
    }

    #[test]
    fn test_unexpected_characters_fall_back() {
        for message in ["😀🎉", "!@#$%^&*()", "????????"] {
            assert!(respond(Some(message)).is_fallback(), "message: {:?}", message);
        }
    }

    #[test]
    fn test_continues_after_fallback() {
        assert!(respond(Some("xyzabc")).is_fallback());
        assert_eq!(respond(Some("quanto custa")).response, "Resposta sobre orçamento");
        assert!(respond(Some("!!!!")).is_fallback());
        assert_eq!(respond(Some("agendar")).response, "Resposta sobre agendamento");
    }
}
