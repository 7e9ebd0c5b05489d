// src/report/template.rs
//! `$table_json` substitution into the report page.

use crate::error::{AnalyzerError, Result};
use crate::types::ReportRow;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLACEHOLDER: &str = "$table_json";
const BRACED_PLACEHOLDER: &str = "${table_json}";

/// Name of the template looked up inside the report directory.
pub const TEMPLATE_NAME: &str = "report.html";

const BUILTIN: &str = include_str!("../../templates/report.html");

/// Picks the template: the configured file, else `report.html` in the
/// report directory, else the built-in page.
///
/// # Errors
/// Returns error if a chosen template file cannot be read.
pub fn load(configured: Option<&Path>, report_dir: &Path) -> Result<String> {
    let path: Option<PathBuf> = match configured {
        Some(p) => Some(p.to_path_buf()),
        None => Some(report_dir.join(TEMPLATE_NAME)).filter(|p| p.is_file()),
    };
    match path {
        Some(p) => fs::read_to_string(&p).map_err(|e| AnalyzerError::io(e, p)),
        None => Ok(BUILTIN.to_string()),
    }
}

/// Replaces every placeholder with the rows as a JSON array.
///
/// Any other `$` text is left alone.
///
/// # Errors
/// Returns error if the template has no placeholder or serialization fails.
pub fn render(template: &str, rows: &[ReportRow]) -> Result<String> {
    if !template.contains(PLACEHOLDER) && !template.contains(BRACED_PLACEHOLDER) {
        return Err(AnalyzerError::Template(format!(
            "no {PLACEHOLDER} placeholder in template"
        )));
    }
    // `</` would let a crafted path close the surrounding <script> element.
    let json = serde_json::to_string(rows)?.replace("</", "<\\/");
    Ok(template
        .replace(BRACED_PLACEHOLDER, &json)
        .replace(PLACEHOLDER, &json))
}
