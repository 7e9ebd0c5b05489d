// src/discovery.rs
//! Finds the newest `nginx-access-ui.log-YYYYMMDD[.gz]` in the log directory.

use crate::error::Result;
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

pub const LOG_NAME_PATTERN: &str = r"^nginx-access-ui\.log-(?P<date>\d{8})(?P<gz>\.gz)?$";

static LOG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOG_NAME_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// A log file picked for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub compressed: bool,
}

/// Returns the log with the latest embedded date, or `None` when the
/// directory is missing or holds no matching file.
///
/// Only direct children are considered. Names with an impossible date
/// (`20171341`) are skipped.
///
/// # Errors
/// Returns error if the directory cannot be read.
pub fn find_latest(dir: &Path) -> Result<Option<LogFile>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut latest: Option<LogFile> = None;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(candidate) = match_log_name(entry.path()) else {
            continue;
        };
        if latest.as_ref().map_or(true, |l| candidate.date > l.date) {
            latest = Some(candidate);
        }
    }
    Ok(latest)
}

fn match_log_name(path: &Path) -> Option<LogFile> {
    let name = path.file_name()?.to_str()?;
    let caps = LOG_NAME_RE.captures(name)?;
    let date = NaiveDate::parse_from_str(caps.name("date")?.as_str(), "%Y%m%d").ok()?;
    Some(LogFile {
        path: path.to_path_buf(),
        date,
        compressed: caps.name("gz").is_some(),
    })
}
