//! Applies a scaffold plan to the working tree.
//!
//! The engine produces a plan; this executor owns the remaining side
//! effects. Destination templates are interpolated against the plan's
//! location table here, so an undeclared token surfaces as a fatal error
//! at the first affected entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use reposer_core::application::ApplicationError;
use reposer_core::application::ports::PackageIndex;
use reposer_core::application::services::ScaffoldPlan;
use reposer_core::domain::ScaffoldOp;
use reposer_core::error::{ReposerError, ReposerResult};

/// Which entries of the plan to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteMode {
    /// Apply every entry (the canonical pass).
    Full,
    /// Apply only entries whose destination does not exist yet (the fast
    /// quick-update pass).
    MissingOnly,
}

/// What an execution pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub applied: usize,
    pub skipped: usize,
}

/// Executes scaffold operations against the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalExecutor {
    project_root: PathBuf,
}

impl LocalExecutor {
    /// Create an executor; relative destinations resolve under
    /// `project_root`.
    pub fn rooted(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Apply the plan's consolidated mapping.
    ///
    /// Sources are resolved against the contributing package's install
    /// directory from `index`. A missing source or a failed filesystem
    /// operation aborts the pass with an error; retracted entries and
    /// (in `MissingOnly` mode) already-present destinations are counted
    /// as skipped.
    pub fn apply(
        &self,
        plan: &ScaffoldPlan,
        index: &dyn PackageIndex,
        mode: ExecuteMode,
    ) -> ReposerResult<ExecutionReport> {
        let mut report = ExecutionReport::default();

        for (destination, file) in &plan.mapping {
            let resolved = plan.locations.interpolate(destination)?;
            let dest = self.absolute(Path::new(&resolved));

            let source_rel = match &file.op {
                ScaffoldOp::Skip => {
                    debug!(
                        destination = %dest.display(),
                        package = %file.package,
                        "destination retracted, leaving in place"
                    );
                    report.skipped += 1;
                    continue;
                }
                ScaffoldOp::Copy { source } | ScaffoldOp::Symlink { source } => source,
            };

            if mode == ExecuteMode::MissingOnly && dest.exists() {
                debug!(destination = %dest.display(), "already present, skipping");
                report.skipped += 1;
                continue;
            }

            let base = index.install_path(&file.package).ok_or_else(|| {
                ReposerError::from(ApplicationError::Filesystem {
                    path: dest.clone(),
                    reason: format!("no install path known for package '{}'", file.package),
                })
            })?;
            let source = base.join(source_rel);
            if !source.is_file() {
                return Err(ApplicationError::Filesystem {
                    path: source,
                    reason: "scaffold source does not exist".into(),
                }
                .into());
            }

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| fs_error(parent, e, "create directory"))?;
            }
            remove_existing(&dest)?;

            match &file.op {
                ScaffoldOp::Symlink { .. } => place_symlink(&source, &dest)?,
                _ => {
                    fs::copy(&source, &dest)
                        .map_err(|e| fs_error(&dest, e, "copy scaffold file"))?;
                }
            }

            info!(
                destination = %dest.display(),
                package = %file.package,
                "scaffolded"
            );
            report.applied += 1;
        }

        Ok(report)
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Remove a stale file or symlink so the new operation replaces it.
fn remove_existing(dest: &Path) -> ReposerResult<()> {
    if dest.symlink_metadata().is_ok() {
        fs::remove_file(dest).map_err(|e| fs_error(dest, e, "replace existing file"))?;
    }
    Ok(())
}

#[cfg(unix)]
fn place_symlink(source: &Path, dest: &Path) -> ReposerResult<()> {
    std::os::unix::fs::symlink(source, dest).map_err(|e| fs_error(dest, e, "create symlink"))
}

#[cfg(not(unix))]
fn place_symlink(source: &Path, dest: &Path) -> ReposerResult<()> {
    // No reliable symlink support; fall back to a copy.
    fs::copy(source, dest)
        .map(|_| ())
        .map_err(|e| fs_error(dest, e, "copy scaffold file"))
}

fn fs_error(path: &Path, e: io::Error, operation: &str) -> ReposerError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemoryIndex;
    use reposer_core::domain::{
        ConsolidatedMapping, LocationTable, Package, ScaffoldFileInfo,
    };
    use std::fs;

    fn plan_with(
        locations: LocationTable,
        entries: Vec<(&str, ScaffoldOp)>,
    ) -> ScaffoldPlan {
        let mut mapping = ConsolidatedMapping::new();
        for (dest, op) in entries {
            mapping.insert(
                dest.to_string(),
                ScaffoldFileInfo {
                    op,
                    package: "dep".into(),
                },
            );
        }
        ScaffoldPlan {
            allowed_packages: vec!["dep".into()],
            locations,
            mapping,
            warnings: Vec::new(),
        }
    }

    fn fixture() -> (tempfile::TempDir, MemoryIndex, LocationTable) {
        let temp = tempfile::tempdir().unwrap();
        let dep_dir = temp.path().join("vendor/dep");
        fs::create_dir_all(dep_dir.join("assets")).unwrap();
        fs::write(dep_dir.join("assets/robots.txt"), "User-agent: *\n").unwrap();

        let web = temp.path().join("web");
        fs::create_dir_all(&web).unwrap();

        let index = MemoryIndex::new(Package::new("root"))
            .with_root_path(temp.path())
            .with_installed(Package::new("dep"), dep_dir);

        let mut locations = LocationTable::new();
        locations.insert("web_root", web);
        (temp, index, locations)
    }

    #[test]
    fn copies_files_into_place() {
        let (temp, index, locations) = fixture();
        let plan = plan_with(
            locations,
            vec![(
                "[web_root]/robots.txt",
                ScaffoldOp::Copy {
                    source: "assets/robots.txt".into(),
                },
            )],
        );

        let report = LocalExecutor::rooted(temp.path())
            .apply(&plan, &index, ExecuteMode::Full)
            .unwrap();

        assert_eq!(report, ExecutionReport { applied: 1, skipped: 0 });
        let placed = temp.path().join("web/robots.txt");
        assert_eq!(fs::read_to_string(placed).unwrap(), "User-agent: *\n");
    }

    #[test]
    fn skip_operations_leave_destinations_alone() {
        let (temp, index, locations) = fixture();
        let plan = plan_with(locations, vec![("[web_root]/.htaccess", ScaffoldOp::Skip)]);

        let report = LocalExecutor::rooted(temp.path())
            .apply(&plan, &index, ExecuteMode::Full)
            .unwrap();

        assert_eq!(report, ExecutionReport { applied: 0, skipped: 1 });
        assert!(!temp.path().join("web/.htaccess").exists());
    }

    #[test]
    fn missing_only_mode_preserves_existing_files() {
        let (temp, index, locations) = fixture();
        fs::write(temp.path().join("web/robots.txt"), "hand edited").unwrap();

        let plan = plan_with(
            locations,
            vec![(
                "[web_root]/robots.txt",
                ScaffoldOp::Copy {
                    source: "assets/robots.txt".into(),
                },
            )],
        );

        let report = LocalExecutor::rooted(temp.path())
            .apply(&plan, &index, ExecuteMode::MissingOnly)
            .unwrap();

        assert_eq!(report, ExecutionReport { applied: 0, skipped: 1 });
        assert_eq!(
            fs::read_to_string(temp.path().join("web/robots.txt")).unwrap(),
            "hand edited"
        );
    }

    #[test]
    fn full_mode_overwrites_existing_files() {
        let (temp, index, locations) = fixture();
        fs::write(temp.path().join("web/robots.txt"), "hand edited").unwrap();

        let plan = plan_with(
            locations,
            vec![(
                "[web_root]/robots.txt",
                ScaffoldOp::Copy {
                    source: "assets/robots.txt".into(),
                },
            )],
        );

        LocalExecutor::rooted(temp.path())
            .apply(&plan, &index, ExecuteMode::Full)
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("web/robots.txt")).unwrap(),
            "User-agent: *\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_operations_link_to_the_source() {
        let (temp, index, locations) = fixture();
        let plan = plan_with(
            locations,
            vec![(
                "[web_root]/robots.txt",
                ScaffoldOp::Symlink {
                    source: "assets/robots.txt".into(),
                },
            )],
        );

        LocalExecutor::rooted(temp.path())
            .apply(&plan, &index, ExecuteMode::Full)
            .unwrap();

        let placed = temp.path().join("web/robots.txt");
        assert!(placed.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(placed).unwrap(), "User-agent: *\n");
    }

    #[test]
    fn unknown_token_in_destination_is_fatal() {
        let (temp, index, locations) = fixture();
        let plan = plan_with(
            locations,
            vec![(
                "[doc_root]/robots.txt",
                ScaffoldOp::Copy {
                    source: "assets/robots.txt".into(),
                },
            )],
        );

        let err = LocalExecutor::rooted(temp.path())
            .apply(&plan, &index, ExecuteMode::Full)
            .unwrap_err();
        assert!(err.to_string().contains("doc_root"));
    }

    #[test]
    fn missing_source_is_fatal() {
        let (temp, index, locations) = fixture();
        let plan = plan_with(
            locations,
            vec![(
                "[web_root]/gone.txt",
                ScaffoldOp::Copy {
                    source: "assets/gone.txt".into(),
                },
            )],
        );

        assert!(
            LocalExecutor::rooted(temp.path())
                .apply(&plan, &index, ExecuteMode::Full)
                .is_err()
        );
    }
}
