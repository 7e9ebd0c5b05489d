// src/analysis/gate.rs
//! Whole-file circuit breaker on the share of unparsable lines.
//!
//! The gate only counts while lines stream through; the limit is checked once,
//! after the source is exhausted, so the decision uses the true ratio.

use crate::error::{AnalyzerError, Result};
use crate::types::{GateSummary, LineOutcome, ParsedRecord};

#[derive(Debug, Clone)]
pub struct ErrorGate {
    limit: f64,
    summary: GateSummary,
}

impl ErrorGate {
    /// `limit` is a fraction: 0.64 tolerates up to 64% unparsable lines.
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            summary: GateSummary::default(),
        }
    }

    /// Counts one line and forwards it when it parsed.
    pub fn observe(&mut self, outcome: LineOutcome) -> Option<ParsedRecord> {
        self.summary.total_lines += 1;
        match outcome {
            LineOutcome::Parsed(record) => Some(record),
            LineOutcome::Unparsed => {
                self.summary.failed_lines += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn summary(&self) -> GateSummary {
        self.summary
    }

    /// Final verdict. Trips only when the ratio is strictly above the limit.
    ///
    /// # Errors
    /// Returns `ErrorsLimitExceeded` when too many lines failed to parse.
    pub fn check(&self) -> Result<GateSummary> {
        let ratio = self.summary.failure_ratio();
        if ratio > self.limit {
            return Err(AnalyzerError::ErrorsLimitExceeded {
                failed: self.summary.failed_lines,
                total: self.summary.total_lines,
                ratio,
                limit: self.limit,
            });
        }
        Ok(self.summary)
    }
}
