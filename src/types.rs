// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// One successfully parsed access-log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub path: String,
    /// Seconds.
    pub response_time: f64,
}

/// What the line parser made of a raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(ParsedRecord),
    Unparsed,
}

/// Running timing statistics for one request path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStats {
    pub path: String,
    pub request_count: usize,
    pub time_sum: f64,
    pub time_max: f64,
    /// Response times in encounter order; only read for the median.
    pub time_samples: Vec<f64>,
}

impl PathStats {
    #[must_use]
    pub fn new(path: String) -> Self {
        Self {
            path,
            request_count: 0,
            time_sum: 0.0,
            time_max: 0.0,
            time_samples: Vec::new(),
        }
    }

    pub fn record(&mut self, response_time: f64) {
        self.request_count += 1;
        self.time_sum += response_time;
        if response_time > self.time_max {
            self.time_max = response_time;
        }
        self.time_samples.push(response_time);
    }
}

/// One line of the rendered report.
///
/// Serialized with `url` as the path key, which is what the report page's
/// table script reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "url")]
    pub path: String,
    pub count: usize,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

/// Line counters collected by the error gate over one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateSummary {
    pub total_lines: usize,
    pub failed_lines: usize,
}

impl GateSummary {
    /// Share of lines that failed to parse. Zero for empty input.
    #[must_use]
    pub fn failure_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.failed_lines as f64 / self.total_lines as f64;
        ratio
    }

    #[must_use]
    pub fn parsed_lines(&self) -> usize {
        self.total_lines - self.failed_lines
    }
}

/// Ranked rows plus the counters they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub rows: Vec<ReportRow>,
    pub gate: GateSummary,
}

/// Successful end states of a full run. Failures are [`crate::error::AnalyzerError`].
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// A new report was written.
    Published {
        report: PathBuf,
        rows: Vec<ReportRow>,
        gate: GateSummary,
    },
    /// The report for this log's date already exists; nothing was done.
    UpToDate { report: PathBuf },
}

impl RunOutcome {
    #[must_use]
    pub fn report_path(&self) -> &PathBuf {
        match self {
            Self::Published { report, .. } | Self::UpToDate { report } => report,
        }
    }

    #[must_use]
    pub fn was_published(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}
