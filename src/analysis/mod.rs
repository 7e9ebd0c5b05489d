// src/analysis/mod.rs
//! Parse → gate → aggregate → rank over one stream of log lines.

pub mod aggregator;
pub mod gate;
pub mod ranker;

pub use self::aggregator::Aggregator;
pub use self::gate::ErrorGate;

use crate::config::Config;
use crate::error::Result;
use crate::parser;
use crate::types::Analysis;
use tracing::{debug, warn};

pub struct Analyzer {
    report_size: usize,
    errors_limit: f64,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            report_size: config.report_size,
            errors_limit: config.errors_limit,
        }
    }

    /// Consumes the lines one at a time and ranks the result.
    ///
    /// The error limit is checked only after the last line.
    ///
    /// # Errors
    /// Returns the first read error from `lines`, or `ErrorsLimitExceeded`.
    pub fn analyze<I>(&self, lines: I) -> Result<Analysis>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut gate = ErrorGate::new(self.errors_limit);
        let mut aggregator = Aggregator::new();

        for line in lines {
            if let Some(record) = gate.observe(parser::parse_line(&line?)) {
                aggregator.ingest(record);
            }
        }

        let summary = gate.summary();
        if summary.failed_lines > 0 {
            warn!(
                "{} of {} lines could not be parsed ({:.2}%)",
                summary.failed_lines,
                summary.total_lines,
                summary.failure_ratio() * 100.0
            );
        }
        let gate = gate.check()?;
        debug!("{} distinct paths", aggregator.len());

        let rows = ranker::rank(aggregator.into_stats(), self.report_size);
        Ok(Analysis { rows, gate })
    }
}
