// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::DEFAULT_CONFIG_PATH;
pub use self::types::Config;
use crate::error::{AnalyzerError, Result};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` (or `./config.toml` when present) over the defaults and validates it.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed or out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = io::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error when `report_size` is zero or `errors_limit` is not a fraction.
    pub fn validate(&self) -> Result<()> {
        if self.report_size == 0 {
            return Err(AnalyzerError::Config(
                "report_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.errors_limit) {
            return Err(AnalyzerError::Config(format!(
                "errors_limit must be a fraction between 0 and 1, got {}",
                self.errors_limit
            )));
        }
        Ok(())
    }
}
