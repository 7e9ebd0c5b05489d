// src/pipeline.rs
//! One batch run: find the latest log, analyze it, publish the report.

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::discovery;
use crate::error::{AnalyzerError, Result};
use crate::report::{EmitOutcome, ReportEmitter};
use crate::source;
use crate::types::RunOutcome;
use tracing::info;

/// Runs the whole job for `config`.
///
/// The up-to-date check happens before the log is read, so a rerun on the
/// same day costs a directory listing and nothing else.
///
/// # Errors
/// Returns `NoLogFound`, `ErrorsLimitExceeded`, or any I/O, template or
/// config failure.
pub fn run(config: &Config) -> Result<RunOutcome> {
    config.validate()?;

    let log = discovery::find_latest(&config.log_dir)?.ok_or_else(|| {
        AnalyzerError::NoLogFound {
            dir: config.log_dir.clone(),
        }
    })?;
    info!("Latest log: {} ({})", log.path.display(), log.date);

    let emitter = ReportEmitter::new(config);
    if emitter.exists(log.date) {
        let report = emitter.target(log.date);
        info!("Report {} is up to date", report.display());
        return Ok(RunOutcome::UpToDate { report });
    }

    // Read errors surface from inside the stream; pin them to the log path.
    let analysis = Analyzer::new(config)
        .analyze(source::open(&log)?)
        .map_err(|e| match e {
            AnalyzerError::Io { source, .. } => AnalyzerError::io(source, &log.path),
            other => other,
        })?;
    info!(
        "Parsed {} of {} lines",
        analysis.gate.parsed_lines(),
        analysis.gate.total_lines
    );

    match emitter.emit(log.date, &analysis.rows)? {
        EmitOutcome::Written(report) => Ok(RunOutcome::Published {
            report,
            rows: analysis.rows,
            gate: analysis.gate,
        }),
        EmitOutcome::AlreadyExists(report) => {
            info!("Report {} appeared during the run; kept it", report.display());
            Ok(RunOutcome::UpToDate { report })
        }
    }
}
