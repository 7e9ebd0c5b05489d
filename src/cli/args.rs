use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug, Default)]
#[command(
    name = "latency-report",
    version,
    about = "Ranks the slowest paths of the latest nginx access log"
)]
pub struct Cli {
    /// Config file (TOML, or JSON when it ends in .json). Defaults to ./config.toml if present.
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Rows kept in the report
    #[arg(long, value_name = "N")]
    pub report_size: Option<usize>,
    /// Tolerated share of unparsable lines, as a fraction (0.64 = 64%)
    #[arg(long, value_name = "FRACTION")]
    pub errors_limit: Option<f64>,
    /// Directory holding nginx-access-ui.log-YYYYMMDD[.gz]
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
    /// Directory the reports are written to
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Layers command-line values over the file config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(n) = self.report_size {
            config.report_size = n;
        }
        if let Some(limit) = self.errors_limit {
            config.errors_limit = limit;
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir.clone_from(dir);
        }
        if let Some(dir) = &self.report_dir {
            config.report_dir.clone_from(dir);
        }
    }
}
