//! Output formatting for CLI commands.
//!
//! The clean operation has three terminal outcomes: saved, unchanged, and
//! failed. Text output uses a small semantic color theme (green for a
//! completed save, dimmed for a no-op, red for errors); `--json` swaps the
//! human lines for a machine-readable summary.

use std::env;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text with semantic colors.
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

/// Machine-readable outcome summary for `--json`.
#[derive(Debug, Serialize)]
struct OutcomeReport<'a> {
    outcome: &'a str,
    path: String,
}

/// Whether colors should be applied, honoring the `NO_COLOR` standard.
fn use_colors() -> bool {
    env::var("NO_COLOR").is_err()
}

/// Report that the document changed and was written back.
pub fn report_saved(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => print_json(&OutcomeReport {
            outcome: "saved",
            path: path.display().to_string(),
        }),
        OutputMode::Text => {
            let label = if use_colors() {
                "Project saved".green().bold().to_string()
            } else {
                "Project saved".to_string()
            };
            println!("{}: {}", label, path.display());
            Ok(())
        }
    }
}

/// Report that no mutation was needed and nothing was written.
pub fn report_unchanged(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => print_json(&OutcomeReport {
            outcome: "unchanged",
            path: path.display().to_string(),
        }),
        OutputMode::Text => {
            let label = if use_colors() {
                "Nothing to change".dimmed().to_string()
            } else {
                "Nothing to change".to_string()
            };
            println!("{}: {}", label, path.display());
            Ok(())
        }
    }
}

/// Print an error message to the diagnostic stream.
pub fn error(message: &str) {
    if use_colors() {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {message}");
    }
}

/// Serialize a value as JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_report_serializes() {
        let report = OutcomeReport {
            outcome: "saved",
            path: "ios/App.xcodeproj/project.pbxproj".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"outcome\":\"saved\""));
        assert!(json.contains("project.pbxproj"));
    }
}
