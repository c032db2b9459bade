//! Implementation of the `reposer resolve` command.
//!
//! The canonical pass: every consolidated mapping entry is applied,
//! replacing stale copies of previously scaffolded files.

use tracing::instrument;

use reposer_adapters::ExecuteMode;

use crate::{
    cli::global::GlobalArgs,
    commands::scaffold,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `reposer resolve` command.
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("Resolving scaffold files...")?;

    let outcome = scaffold::run(ExecuteMode::Full, &config, &output)?;

    output.success(&format!(
        "Scaffolded {} file(s) from {} package(s)",
        outcome.applied, outcome.packages
    ))?;
    if outcome.skipped > 0 {
        output.info(&format!("{} entry(ies) left untouched", outcome.skipped))?;
    }

    Ok(())
}
