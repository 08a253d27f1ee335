//! Sketch CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use sketch_cli::{Args, error_adapter::render_report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Sketch");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = sketch_cli::run(&args) {
        let report = render_report(&err);

        // Bypasses the logger: the report is shown at every log level.
        eprintln!("{report}");
        debug!(err:?; "Run failed");
        process::exit(1);
    }

    info!("Completed successfully");
}
