//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;
