//! Serializable summary of a parse run.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::parser::ParseDiagnostics;

/// Per-run parse report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    pub generated_at: String,
    pub total_lines: usize,
    pub skipped_lines: usize,
    pub base_lines: usize,
    pub alias_lines: usize,
    pub recognized_ratio: f64,
}

impl ParseReport {
    /// Builds a report from the parser's run counters, stamped with the
    /// current UTC time.
    pub fn from_diagnostics(diagnostics: &ParseDiagnostics) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            total_lines: diagnostics.total_lines,
            skipped_lines: diagnostics.skipped_lines,
            base_lines: diagnostics.base_lines,
            alias_lines: diagnostics.alias_lines,
            recognized_ratio: diagnostics.recognized_ratio(),
        }
    }
}
