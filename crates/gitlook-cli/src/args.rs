//! Command-line argument definitions for the GitLook CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the curriculum input, output directory,
//! configuration file selection, module filtering, frame export and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the GitLook animation renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the curriculum JSON file
    #[arg(help = "Path to the curriculum file")]
    pub input: String,

    /// Directory the rendered scenes are written to
    #[arg(short, long, default_value = "out")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render only the module with this id
    #[arg(short, long)]
    pub module: Option<String>,

    /// Also write one SVG per distinct cue time of each animation
    #[arg(long)]
    pub frames: bool,

    /// Fail when content validation reports warnings
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
