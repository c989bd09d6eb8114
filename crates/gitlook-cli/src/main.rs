//! `gitlook` binary.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use gitlook_cli::{
    Args,
    error_adapter::{render, to_reportables},
};

/// Parses `level`, falling back to `warn` when it is not a log level.
fn log_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    })
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let level = log_level(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
    debug!(args:?; "Parsed arguments");

    let Err(err) = gitlook_cli::run(&args) else {
        info!(input = args.input.as_str(); "Done");
        return;
    };

    // One report per content diagnostic
    for report in to_reportables(&err) {
        error!("{}", render(report.as_ref()));
    }
    process::exit(1);
}
