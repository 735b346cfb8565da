//! CLI argument parsing module for pacfresh

use crate::config::DEFAULT_PACKAGE_LIST;
use clap::Parser;
use std::path::PathBuf;

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Warnings and errors only
    Quiet,
    /// Per-package progress lines
    Normal,
    /// Everything, including registry failures
    Verbose,
}

impl LogLevel {
    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "pacfresh=warn",
            LogLevel::Normal => "pacfresh=info",
            LogLevel::Verbose => "pacfresh=debug",
        }
    }
}

/// Report outdated packages from a curated package list
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pacfresh",
    version,
    about = "Report outdated packages from a curated pacman/AUR package list"
)]
pub struct CliArgs {
    /// Package list file (YAML, or TOML with a .toml extension)
    #[arg(default_value = DEFAULT_PACKAGE_LIST)]
    pub config: PathBuf,

    /// Enable verbose output, including failed registry lookups
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print the report and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Show a progress bar instead of one line per package
    #[arg(long)]
    pub progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Resolve the log level from the verbosity flags
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Verbose
        } else if self.quiet || self.progress {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        }
    }
}
