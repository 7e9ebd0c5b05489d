pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod types;
