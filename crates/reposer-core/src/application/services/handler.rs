//! The per-invocation orchestrator wiring the resolution services together.

use tracing::{debug, instrument};

use crate::application::ports::{DirectoryMaker, PackageIndex};
use crate::application::services::{
    AllowedPackageResolver, Consolidation, LocationResolver, MappingConsolidator,
};
use crate::domain::{ConsolidatedMapping, LocationTable, MappingWarning, ScaffoldOptions};
use crate::error::ReposerResult;

/// Everything one invocation of the engine produces.
///
/// Recomputed fresh on every run from the current index; the external
/// operation executor consumes it and owns all remaining side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldPlan {
    /// Ordered override priority, lowest first.
    pub allowed_packages: Vec<String>,
    /// Resolved location tokens; every directory exists.
    pub locations: LocationTable,
    /// One winning operation per destination path template.
    pub mapping: ConsolidatedMapping,
    /// Malformed entries that were skipped along the way.
    pub warnings: Vec<MappingWarning>,
}

/// Main scaffolding orchestrator.
///
/// Owns nothing beyond the injected package index and directory utility;
/// each `plan` call reads the current state and builds a fresh plan.
pub struct ScaffoldHandler {
    index: Box<dyn PackageIndex>,
    dirs: Box<dyn DirectoryMaker>,
}

impl ScaffoldHandler {
    pub fn new(index: Box<dyn PackageIndex>, dirs: Box<dyn DirectoryMaker>) -> Self {
        Self { index, dirs }
    }

    /// Run the resolution engine once.
    ///
    /// Reads the root package's options, computes the allowed-package
    /// order, materializes the location table (creating missing
    /// directories), and consolidates every allowed package's file
    /// mappings.
    #[instrument(skip_all)]
    pub fn plan(&self) -> ReposerResult<ScaffoldPlan> {
        let root = self.index.root_package();
        let options = ScaffoldOptions::for_package(root);
        debug!(
            package = root.name(),
            declared = options.allowed_packages.len(),
            "read root scaffold options"
        );

        let allowed = AllowedPackageResolver::new(self.index.as_ref()).resolve(&options);
        debug!(packages = ?allowed, "allowed packages resolved");

        let locations = LocationResolver::build(&options, self.dirs.as_ref())?;

        let Consolidation { mapping, warnings } =
            MappingConsolidator::new(self.index.as_ref()).consolidate(&allowed);
        debug!(
            files = mapping.len(),
            skipped = warnings.len(),
            "file mappings consolidated"
        );

        Ok(ScaffoldPlan {
            allowed_packages: allowed,
            locations,
            mapping,
            warnings,
        })
    }
}
