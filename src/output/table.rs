//! Table output formatter for human-readable display
//!
//! Renders the outdated packages as aligned columns followed by a one-line
//! summary. Cells are padded before colouring so ANSI codes do not disturb
//! alignment.

use crate::domain::PackageDescriptor;
use crate::orchestrator::CheckReport;
use colored::Colorize;
use std::io::Write;

/// Column headers, in display order
const HEADERS: [&str; 5] = ["Name", "Group", "Source", "Installed", "Available"];

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// Table formatter for the check report
pub struct TableFormatter {
    /// Whether to use colors
    color: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Cells of one report row, in header order
    fn row(pkg: &PackageDescriptor) -> [&str; 5] {
        [
            pkg.name.as_str(),
            pkg.group.as_str(),
            pkg.source.label(),
            pkg.version.as_deref().unwrap_or("-"),
            pkg.remote_version.as_deref().unwrap_or("-"),
        ]
    }

    /// Width of each column: the longest header or cell
    fn column_widths(rows: &[[&str; 5]]) -> [usize; 5] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        format!("{:width$}", cell, width = width)
    }

    /// Write the header line
    fn write_header(&self, widths: &[usize; 5], writer: &mut dyn Write) -> std::io::Result<()> {
        let cells: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| {
                let padded = Self::pad(h, *w);
                if self.color {
                    padded.bold().underline().to_string()
                } else {
                    padded
                }
            })
            .collect();
        writeln!(writer, "{}", cells.join(COLUMN_GAP).trim_end())
    }

    /// Write a single package line
    fn write_row(
        &self,
        row: &[&str; 5],
        widths: &[usize; 5],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(column, (cell, width))| {
                let padded = Self::pad(cell, *width);
                if !self.color {
                    return padded;
                }
                match column {
                    0 => padded.bright_white().bold().to_string(),
                    1 | 2 => padded.dimmed().to_string(),
                    3 => padded.yellow().to_string(),
                    _ => padded.green().to_string(),
                }
            })
            .collect();
        writeln!(writer, "{}", cells.join(COLUMN_GAP).trim_end())
    }

    /// Write the closing summary line
    fn write_summary(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let count = report.pending.len();
        let noun = if count == 1 { "package" } else { "packages" };
        let line = format!(
            "{} {} outdated ({} installed of {} listed)",
            count, noun, report.installed, report.listed
        );
        if self.color {
            writeln!(writer, "{}", line.dimmed())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Format and write the check report
    pub fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.pending.is_empty() {
            let message = "All packages are up to date.";
            if self.color {
                writeln!(writer, "{}", message.green())?;
            } else {
                writeln!(writer, "{}", message)?;
            }
            return Ok(());
        }

        let rows: Vec<[&str; 5]> = report.pending.iter().map(Self::row).collect();
        let widths = Self::column_widths(&rows);

        self.write_header(&widths, writer)?;
        for row in &rows {
            self.write_row(row, &widths, writer)?;
        }
        writeln!(writer)?;
        self.write_summary(report, writer)
    }
}
