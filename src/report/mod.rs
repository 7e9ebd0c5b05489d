// src/report/mod.rs
//! Report file naming, the up-to-date check and publishing.

pub mod template;
pub mod writer;

use crate::config::Config;
use crate::error::Result;
use crate::types::ReportRow;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// What happened when a report was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    Written(PathBuf),
    AlreadyExists(PathBuf),
}

impl EmitOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(p) | Self::AlreadyExists(p) => p,
        }
    }
}

/// `report-YYYY.MM.DD.html` for the log date.
#[must_use]
pub fn report_file_name(date: NaiveDate) -> String {
    format!("report-{}.html", date.format("%Y.%m.%d"))
}

pub struct ReportEmitter {
    report_dir: PathBuf,
    template: Option<PathBuf>,
}

impl ReportEmitter {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            report_dir: config.report_dir.clone(),
            template: config.template.clone(),
        }
    }

    #[must_use]
    pub fn target(&self, date: NaiveDate) -> PathBuf {
        self.report_dir.join(report_file_name(date))
    }

    #[must_use]
    pub fn exists(&self, date: NaiveDate) -> bool {
        self.target(date).exists()
    }

    /// Renders and atomically publishes the report, unless one for `date`
    /// is already there.
    ///
    /// # Errors
    /// Returns error if the template cannot be loaded or the file cannot be written.
    pub fn emit(&self, date: NaiveDate, rows: &[ReportRow]) -> Result<EmitOutcome> {
        let target = self.target(date);
        if target.exists() {
            return Ok(EmitOutcome::AlreadyExists(target));
        }

        let template = template::load(self.template.as_deref(), &self.report_dir)?;
        let html = template::render(&template, rows)?;
        writer::publish(&target, &html)?;
        info!("Report written to {}", target.display());
        Ok(EmitOutcome::Written(target))
    }
}
