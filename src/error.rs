// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(
        "Too many unparsable lines: {failed} of {total} ({:.1}%) exceeds the limit of {:.1}%",
        .ratio * 100.0,
        .limit * 100.0
    )]
    ErrorsLimitExceeded {
        failed: usize,
        total: usize,
        ratio: f64,
        limit: f64,
    },

    #[error("No access log found in {}", .dir.display())]
    NoLogFound { dir: PathBuf },

    #[error("Template error: {0}")]
    Template(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to AnalyzerError::Io with unknown path.
impl From<std::io::Error> for AnalyzerError {
    fn from(source: std::io::Error) -> Self {
        AnalyzerError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for AnalyzerError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        AnalyzerError::Io { source, path }
    }
}
