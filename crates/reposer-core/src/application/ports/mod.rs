//! Ports (traits) for the engine's external collaborators.
//!
//! The resolution engine is pure; everything it needs from the outside
//! world — the package manager's local repository index and a directory
//! utility — comes in through these traits. `reposer-adapters` provides
//! the production implementations.

use std::path::{Path, PathBuf};

use crate::domain::Package;
use crate::error::ReposerResult;

/// Port for package lookup against the host package manager's state.
///
/// The index is an injected, read-only dependency: the engine never holds
/// ambient global session state, which keeps every service unit-testable
/// without a live package manager.
///
/// Implemented by:
/// - `reposer_adapters::VendorIndex` (installed tree, production)
/// - `reposer_adapters::MemoryIndex` (testing)
pub trait PackageIndex: Send + Sync {
    /// The root package — the project this tooling runs inside.
    fn root_package(&self) -> &Package;

    /// Look up an installed package by name.
    ///
    /// The root package is resolvable by its own name like any other
    /// entry. `None` is an expected outcome, not an error: declared
    /// scaffolding collaborators are allowed to be absent.
    fn find_package(&self, name: &str) -> Option<Package>;

    /// The directory a package's files are installed under: the project
    /// root for the root package, the vendor directory entry otherwise.
    fn install_path(&self, name: &str) -> Option<PathBuf>;
}

/// Port for the directory-existence/creation utility.
///
/// Location building is the one place the engine touches the filesystem;
/// it does so only through this trait.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryMaker: Send + Sync {
    /// Create the directory (and parents) if missing. Idempotent: an
    /// existing directory is a no-op, not an error.
    fn ensure_directory(&self, path: &Path) -> ReposerResult<()>;

    /// Resolve a path to its canonical absolute form.
    fn canonicalize(&self, path: &Path) -> ReposerResult<PathBuf>;
}
