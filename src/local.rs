//! Local package database queries
//!
//! This module provides:
//! - The `LocalState` trait used by normalization to look up installed versions
//! - `PacmanDatabase`, which asks `pacman -Qi` for the installed version
//! - A `CommandRunner` seam so the pacman invocation can be replaced in tests

use regex::Regex;
use std::process::Command;
use std::sync::LazyLock;
use tracing::debug;

/// `Version : 1:2.3-4` line of `pacman -Qi` output
static VERSION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Version[ \t]*:[ \t]*(.*)$").unwrap());

/// Leading epoch, e.g. the `1:` of `1:19.03.2-1`
static EPOCH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+:").unwrap());

/// Source of installed package versions
pub trait LocalState {
    /// Returns the installed version of `name`, or None if it is not installed
    fn installed_version(&self, name: &str) -> Option<String>;
}

/// Captured result of running an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Standard output, lossily decoded
    pub stdout: String,
}

/// Trait for running external commands
pub trait CommandRunner {
    /// Run `program` with `args`, or return an error if it cannot be spawned
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput>;
}

/// Runs real processes with the C locale, so field labels are not translated
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .env("LC_ALL", "C")
            .output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

/// Local state backed by the pacman database
#[derive(Debug, Default)]
pub struct PacmanDatabase<R = SystemCommandRunner> {
    runner: R,
}

impl PacmanDatabase {
    /// Create a pacman-backed local state that runs the real `pacman`
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner)
    }
}

impl<R: CommandRunner> PacmanDatabase<R> {
    /// Create a pacman-backed local state with a custom command runner
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> LocalState for PacmanDatabase<R> {
    fn installed_version(&self, name: &str) -> Option<String> {
        let output = match self.runner.run("pacman", &["-Qi", name]) {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to run pacman for {}: {}", name, e);
                return None;
            }
        };

        if !output.success {
            debug!("{} is not installed", name);
            return None;
        }

        parse_installed_version(&output.stdout)
    }
}

/// Extracts the version from `pacman -Qi` output, dropping any epoch
pub fn parse_installed_version(output: &str) -> Option<String> {
    let captures = VERSION_LINE_RE.captures(output)?;
    let raw = captures.get(1)?.as_str().trim();
    let version = EPOCH_RE.replace(raw, "");
    if version.is_empty() {
        None
    } else {
        Some(version.into_owned())
    }
}
