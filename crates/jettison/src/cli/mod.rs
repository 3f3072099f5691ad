//! CLI argument parsing and command dispatch.
//!
//! jettison is a single-operation tool: point it at a project (or a
//! directory containing one) and it cleans out Carthage copy-phase
//! artifacts and embeds linked frameworks natively.
//!
//! # Example
//!
//! ```bash
//! jettison path/to/App.xcodeproj
//! jettison ios/ --debug
//! jettison --build-dir Dependencies/Build --json
//! ```

mod execute;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Jettison - clean Carthage copy-phase artifacts out of an Xcode project
///
/// Removes copy-script build phases and stale framework search paths left
/// by a dependency-copy workflow, repoints framework file references at the
/// build products directory, and embeds every linked dynamic framework.
/// The project file is rewritten only when something actually changed.
#[derive(Parser, Debug)]
#[command(name = "jettison")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project path: a .xcodeproj bundle, or a directory to search for one
    #[arg(default_value = ".", value_parser = validate_path)]
    pub path: PathBuf,

    /// Build directory the dependency-copy workflow populated
    #[arg(long, default_value = crate::domain::DEFAULT_BUILD_DIR)]
    pub build_dir: String,

    /// Print debug information for every edit
    #[arg(short, long)]
    pub debug: bool,

    /// Output the outcome in JSON format for programmatic use
    #[arg(long)]
    pub json: bool,
}

/// Validate that the given path exists.
fn validate_path(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("'{value}' does not exist"))
    }
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the clean-and-embed operation
    pub async fn execute(&self) -> Result<()> {
        execute::execute_clean(self).await
    }
}
