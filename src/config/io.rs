// src/config/io.rs
use super::types::Config;
use crate::error::{AnalyzerError, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

/// Loads the config file, falling back to defaults.
///
/// An explicitly requested file must exist; the default path is optional.
///
/// # Errors
/// Returns error if the file cannot be read or does not parse.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                load_file(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Reads one config file. `.json` files are JSON, everything else TOML.
///
/// # Errors
/// Returns error if the file cannot be read or does not parse.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| AnalyzerError::io(e, path))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        parse_json(&content)
    } else {
        parse_toml(&content)
    };
    parsed.map_err(|e| AnalyzerError::Config(format!("{}: {e}", path.display())))
}

/// # Errors
/// Returns the TOML parse error message.
pub fn parse_toml(content: &str) -> std::result::Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

/// # Errors
/// Returns the JSON parse error message.
pub fn parse_json(content: &str) -> std::result::Result<Config, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}
