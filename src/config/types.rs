// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run settings for one analyzer invocation.
///
/// Every key is optional in the file; missing keys take the defaults below.
/// The upper-case aliases accept config files written for the older script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of rows kept in the report.
    #[serde(default = "default_report_size", alias = "REPORT_SIZE")]
    pub report_size: usize,
    /// Directory the `report-YYYY.MM.DD.html` files are written to.
    #[serde(default = "default_report_dir", alias = "REPORT_DIR")]
    pub report_dir: PathBuf,
    /// Directory scanned for `nginx-access-ui.log-YYYYMMDD[.gz]`.
    #[serde(default = "default_log_dir", alias = "LOG_DIR")]
    pub log_dir: PathBuf,
    /// Where the analyzer's own log goes. Stdout when unset.
    #[serde(default, alias = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
    /// Largest tolerated share of unparsable lines, as a fraction in `[0, 1]`.
    #[serde(default = "default_errors_limit", alias = "ERRORS_LIMIT")]
    pub errors_limit: f64,
    /// HTML template with a `$table_json` placeholder. Built-in when unset.
    #[serde(default, alias = "TEMPLATE")]
    pub template: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_size: default_report_size(),
            report_dir: default_report_dir(),
            log_dir: default_log_dir(),
            log_file: None,
            errors_limit: default_errors_limit(),
            template: None,
        }
    }
}

const fn default_report_size() -> usize {
    10
}

const fn default_errors_limit() -> f64 {
    0.64
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("./reports")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./log")
}
