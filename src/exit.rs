// src/exit.rs
//! Process exit codes for `latency-report`.
//!
//! Cron jobs and wrappers key off these, so the numbers are stable.

use crate::error::AnalyzerError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AnalyzerExit {
    /// Report published, or already up to date.
    Success = 0,
    /// Generic error (I/O, config, template).
    Error = 1,
    /// No access log matched in the log directory.
    NoLogFound = 2,
    /// Too many unparsable lines; no report written.
    ErrorsLimitExceeded = 3,
}

impl AnalyzerExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<AnalyzerError>() {
            Some(AnalyzerError::NoLogFound { .. }) => Self::NoLogFound,
            Some(AnalyzerError::ErrorsLimitExceeded { .. }) => Self::ErrorsLimitExceeded,
            _ => Self::Error,
        }
    }
}

impl Termination for AnalyzerExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
