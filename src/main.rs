//! pacfresh - Outdated package report for a curated package list
//!
//! Reads the package list, looks up installed versions with pacman, queries
//! the official repositories and the AUR, and prints the packages whose
//! published version differs from the installed one.

use clap::Parser;
use pacfresh::cli::{CliArgs, LogLevel};
use pacfresh::config::load_package_list;
use pacfresh::orchestrator::Orchestrator;
use pacfresh::output::{create_formatter, OutputConfig};
use pacfresh::progress::Progress;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` / `--quiet` / `--progress`
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO, which prints one `checking` line per package
fn init_tracing(level: LogLevel, ansi: bool) {
    let filter = match level {
        LogLevel::Normal => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.filter_directive())),
        _ => EnvFilter::new(level.filter_directive()),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_ansi(ansi)
                .without_time(),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.log_level(), !args.no_color);

    tracing::debug!("pacfresh starting with args: {:?}", args);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // The package list is required; nothing runs without it
    let list = load_package_list(&args.config)?;

    let orchestrator = Orchestrator::new()?;
    let mut progress = Progress::new(args.progress);
    let report = orchestrator.run(&list, &mut progress).await;

    let formatter = create_formatter(&OutputConfig::from_cli(args.no_color));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
