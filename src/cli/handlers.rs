// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::Config;
use crate::exit::AnalyzerExit;
use crate::logging;
use crate::pipeline;
use crate::types::RunOutcome;
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::error;

/// Loads config, sets up logging and runs one analysis.
///
/// Run failures are logged and turned into exit codes; only setup
/// failures (bad config, unopenable log file) come back as `Err`.
///
/// # Errors
/// Returns error if the config cannot be loaded or logging cannot start.
pub fn handle_run(cli: &Cli) -> Result<AnalyzerExit> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid command-line value")?;
    logging::init(config.log_file.as_deref(), cli.quiet).context("Failed to set up logging")?;

    match pipeline::run(&config) {
        Ok(outcome) => {
            print_summary(&outcome);
            Ok(AnalyzerExit::Success)
        }
        Err(e) => {
            let e = anyhow::Error::new(e);
            error!("{e:#}");
            eprintln!("{} {e:#}", "error:".red().bold());
            Ok(AnalyzerExit::for_error(&e))
        }
    }
}

fn print_summary(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Published { report, rows, gate } => eprintln!(
            "{} {} ({} rows, {} of {} lines parsed)",
            "[OK]".green().bold(),
            report.display(),
            rows.len(),
            gate.parsed_lines(),
            gate.total_lines
        ),
        RunOutcome::UpToDate { report } => eprintln!(
            "{} {} is up to date",
            "[OK]".green().bold(),
            report.display()
        ),
    }
}
