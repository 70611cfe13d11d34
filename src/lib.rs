//! LeadQualBot - rule-based FAQ / lead qualification chatbot
//!
//! A knowledge base of intents (keyword phrases + canned response) is matched
//! against each user message. Matching is deterministic:
//!
//! Message -> normalize -> tokens -> per-intent phrase counts -> (score, priority, order)
//!
//! ## Quick Start
//!
//! ```rust
//! use leadqual_bot::intent::{IntentLoader, IntentMatcher};
//!
//! let intents = IntentLoader::from_json_str(
//!     r#"[{"intent":"orcamento","keywords":["preco","orcamento"],"response":"Vamos ao orçamento!","priority":10}]"#,
//! )
//! .unwrap();
//!
//! let best = IntentMatcher::new().find_best_intent("QUERO ORÇAMENTO", &intents);
//! assert_eq!(best.map(|i| i.name.as_str()), Some("orcamento"));
//! ```

// Core error handling
pub mod error;

// Matching core
pub mod intent;
pub mod normalize;

// Collaborators around the core
pub mod config;
pub mod responder;
pub mod session;

pub use config::BotConfig;
pub use error::{LeadQualError, LeadQualResult};
pub use intent::{find_best_intent, Intent, IntentLoader, IntentMatcher, IntentScore, MatchOutcome};
pub use normalize::normalize;
pub use responder::{decide_response, Decision, FALLBACK_MESSAGE};
pub use session::{SessionExporter, SessionSummary};
