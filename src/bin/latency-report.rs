// src/bin/latency-report.rs
use std::process;

use clap::Parser;
use colored::Colorize;

use latency_report_core::cli::{handlers, Cli};
use latency_report_core::exit::AnalyzerExit;

fn main() {
    let cli = Cli::parse();
    match handlers::handle_run(&cli) {
        Ok(code) => code.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(AnalyzerExit::Error.code());
        }
    }
}
