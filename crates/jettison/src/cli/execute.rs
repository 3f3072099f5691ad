//! Command execution logic.

use anyhow::Result;

use super::Cli;
use crate::app::App;
use crate::output::{self, OutputMode};
use crate::passes;

/// Execute the clean-and-embed operation.
///
/// Loads the project, runs the mutation passes, and writes the document
/// back only when something changed.
pub async fn execute_clean(cli: &Cli) -> Result<()> {
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let mut app = App::from_path(&cli.path).await?;

    let changed = passes::clean_project(app.project_mut(), &cli.build_dir);

    if changed {
        app.save().await?;
        output::report_saved(app.pbxproj_path(), output_mode)?;
    } else {
        output::report_unchanged(app.pbxproj_path(), output_mode)?;
    }

    Ok(())
}
