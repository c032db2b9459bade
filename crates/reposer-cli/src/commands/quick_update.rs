//! Implementation of the `reposer quick-update` command.
//!
//! The fast pass: the resolution runs in full, but only destinations that
//! are missing from the tree get written. Existing files — including ones
//! the user has edited — stay untouched.

use tracing::instrument;

use reposer_adapters::ExecuteMode;

use crate::{
    cli::global::GlobalArgs,
    commands::scaffold,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `reposer quick-update` command.
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("Checking for missing scaffold files...")?;

    let outcome = scaffold::run(ExecuteMode::MissingOnly, &config, &output)?;

    if outcome.applied == 0 {
        output.success("Nothing to do, scaffold files are present")?;
    } else {
        output.success(&format!(
            "Filled in {} missing file(s) from {} package(s)",
            outcome.applied, outcome.packages
        ))?;
    }

    Ok(())
}
