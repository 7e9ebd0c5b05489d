// src/report/writer.rs
use crate::error::{AnalyzerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `content` next to `target` under a temporary name, then renames it
/// into place. Readers see either no report or the complete one.
///
/// # Errors
/// Returns error if the directory cannot be created or the write/rename fails.
pub fn publish(target: &Path, content: &str) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AnalyzerError::io(e, parent))?;
    }

    let temp_path = temp_path_for(target);
    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(AnalyzerError::io(e, temp_path));
    }

    if let Err(e) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(AnalyzerError::io(e, target));
    }
    Ok(())
}

/// Hidden sibling of `target`, unique per process.
fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map_or_else(|| "report".into(), |n| n.to_string_lossy());
    target.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
