//! Per-run interaction counters.
//!
//! Only intent names and counts are kept; user messages are never stored.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
    selected_intents: Vec<String>,
    fallback_count: u32,
    total_interactions: u32,
}

impl SessionSummary {
    /// Start a session at the current local time.
    pub fn new() -> Self {
        Self::starting_at(Local::now().naive_local())
    }

    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            selected_intents: Vec::new(),
            fallback_count: 0,
            total_interactions: 0,
        }
    }

    /// Record a matched intent. Blank names are ignored.
    pub fn record_intent(&mut self, intent_name: &str) {
        if intent_name.trim().is_empty() {
            return;
        }
        self.selected_intents.push(intent_name.to_string());
        self.total_interactions += 1;
    }

    pub fn record_fallback(&mut self) {
        self.fallback_count += 1;
        self.total_interactions += 1;
    }

    pub fn end_session(&mut self) {
        self.end_session_at(Local::now().naive_local());
    }

    pub fn end_session_at(&mut self, end_time: NaiveDateTime) {
        self.end_time = Some(end_time);
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.end_time
    }

    pub fn selected_intents(&self) -> &[String] {
        &self.selected_intents
    }

    pub fn fallback_count(&self) -> u32 {
        self.fallback_count
    }

    pub fn total_interactions(&self) -> u32 {
        self.total_interactions
    }

    pub fn is_empty(&self) -> bool {
        self.total_interactions == 0
    }
}

impl Default for SessionSummary {
    fn default() -> Self {
        Self::new()
    }
}
