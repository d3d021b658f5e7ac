use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Compatibility level to check against
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CheckVersion {
    /// Legacy platform compatibility
    Legacy,
    /// Current platform compatibility
    Current,
}

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "theme-guard")]
#[command(author, version, about = "Theme compatibility guard - scan themes before deployment")]
#[command(long_about = "Scans a theme directory or zip archive against a target platform \
    version and reports deprecated, broken, or unsupported constructs.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Error-severity rule failures found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Theme directory (or zip file with --zip) to scan
    pub path: PathBuf,

    /// Theme path points to a zip file
    #[arg(short, long)]
    pub zip: bool,

    /// Compatibility level to check (overrides config)
    #[arg(short, long, value_enum)]
    pub check_version: Option<CheckVersion>,

    /// Keep the temporary extraction directory after a zip scan
    #[arg(long)]
    pub keep_extracted: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase output verbosity (lists individual failures)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
