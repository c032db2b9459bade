//! Shared driver for the scaffolding commands.
//!
//! `resolve` and `quick-update` run the identical resolution; they differ
//! only in which consolidated entries the executor applies. Both locate
//! the project from the working directory, never from ambient state the
//! engine could see.

use std::path::Path;

use tracing::{debug, info};

use reposer_adapters::{ExecuteMode, LocalDirs, LocalExecutor, VendorIndex, manifest};
use reposer_core::application::ScaffoldHandler;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Summary handed back to the individual command for display.
pub(crate) struct ScaffoldOutcome {
    pub packages: usize,
    pub applied: usize,
    pub skipped: usize,
}

/// Resolve the project, run the engine, and execute the plan.
pub(crate) fn run(
    mode: ExecuteMode,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ScaffoldOutcome> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine current working directory".into(),
        source: e,
    })?;

    let manifest_path =
        manifest::find_manifest_from(&cwd, &config.project.manifest).map_err(CliError::Core)?;
    let project_root = manifest_path
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf();
    debug!(root = %project_root.display(), "project root located");

    let index = VendorIndex::load(
        &project_root,
        &config.project.vendor_dir,
        &config.project.manifest,
    )
    .map_err(CliError::Core)?;
    debug!(installed = index.installed_count(), "package index loaded");

    let handler = ScaffoldHandler::new(
        Box::new(index.clone()),
        Box::new(LocalDirs::rooted(&project_root)),
    );
    let plan = handler.plan().map_err(CliError::Core)?;

    for warning in &plan.warnings {
        output.warning(&format!(
            "{}: skipped '{}' ({})",
            warning.package, warning.destination, warning.reason
        ))?;
    }

    info!(
        packages = plan.allowed_packages.len(),
        files = plan.mapping.len(),
        "scaffold plan resolved"
    );

    let report = LocalExecutor::rooted(&project_root)
        .apply(&plan, &index, mode)
        .map_err(CliError::Core)?;

    Ok(ScaffoldOutcome {
        packages: plan.allowed_packages.len(),
        applied: report.applied,
        skipped: report.skipped,
    })
}
