//! Session summary export to a local text file.
//!
//! Export is best effort: failures are logged and reported as `false`, they
//! never interrupt the conversation.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::summary::SessionSummary;

/// Default export location, relative to the working directory
pub const DEFAULT_EXPORT_PATH: &str = "output/session_summary.txt";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SessionExporter {
    output_path: PathBuf,
}

impl SessionExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Append the summary to the output file.
    ///
    /// Returns `true` when a block was written. Empty summaries are skipped.
    pub fn export(&self, summary: &SessionSummary) -> bool {
        if summary.is_empty() {
            debug!("Session summary is empty, skipping export");
            return false;
        }

        match self.write_block(&Self::build_text_content(summary)) {
            Ok(()) => {
                info!("Session summary exported to: {}", self.output_path.display());
                true
            }
            Err(e) => {
                warn!("Failed to export session summary: {}", e);
                false
            }
        }
    }

    /// Render the text block written by [`Self::export`].
    pub fn build_text_content(summary: &SessionSummary) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "=== LeadQualBot Session Summary ===");
        let _ = writeln!(out, "Start: {}", summary.start_time().format(DATETIME_FORMAT));
        if let Some(end) = summary.end_time() {
            let _ = writeln!(out, "End: {}", end.format(DATETIME_FORMAT));
        }
        let _ = writeln!(out, "Total interactions: {}", summary.total_interactions());
        let _ = writeln!(out, "Fallbacks: {}", summary.fallback_count());
        let _ = writeln!(out, "\nIntents identified:");

        if summary.selected_intents().is_empty() {
            out.push_str("  (none)\n");
        } else {
            for intent in summary.selected_intents() {
                let _ = writeln!(out, "  - {}", intent);
            }
        }

        out.push('\n');
        out
    }

    /// Short summary for the console at the end of a session.
    pub fn format_for_console(summary: &SessionSummary) -> String {
        if summary.is_empty() {
            return "Nenhuma interação registrada nesta sessão.".to_string();
        }

        let intents = if summary.selected_intents().is_empty() {
            "nenhuma".to_string()
        } else {
            summary.selected_intents().join(", ")
        };

        format!(
            "\n--- Resumo da Sessão ---\nInterações: {}\nIntenções identificadas: {}",
            summary.total_interactions(),
            intents
        )
    }

    fn write_block(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)?;
        file.write_all(content.as_bytes())
    }
}
