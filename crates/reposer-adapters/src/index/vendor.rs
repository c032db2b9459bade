//! Package index over the project's installed (vendor) tree.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use reposer_core::application::ports::PackageIndex;
use reposer_core::domain::Package;
use reposer_core::error::ReposerResult;

use crate::manifest;

/// Production package index: the root manifest plus every package manifest
/// found under the vendor directory.
///
/// Vendor entries follow the usual `vendor/<org>/<name>/` layout, but
/// identity always comes from the manifest's declared name, never from the
/// directory path.
#[derive(Debug, Clone)]
pub struct VendorIndex {
    root: Package,
    project_root: PathBuf,
    packages: HashMap<String, Package>,
    install_paths: HashMap<String, PathBuf>,
}

impl VendorIndex {
    /// Load the index for a project.
    ///
    /// The root manifest must parse — without it there is no configuration
    /// to resolve. A vendor manifest that fails to parse is logged and
    /// ignored: one broken installed package must not block the run.
    pub fn load(
        project_root: &Path,
        vendor_dir: &str,
        manifest_name: &str,
    ) -> ReposerResult<Self> {
        let root = manifest::load_package(&project_root.join(manifest_name))?;

        let mut packages = HashMap::new();
        let mut install_paths = HashMap::new();

        let vendor_root = project_root.join(vendor_dir);
        if vendor_root.is_dir() {
            let manifests = WalkDir::new(&vendor_root)
                .min_depth(2)
                .max_depth(3)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| {
                    e.file_type().is_file() && e.file_name() == OsStr::new(manifest_name)
                });

            for entry in manifests {
                match manifest::load_package(entry.path()) {
                    Ok(package) => {
                        let dir = entry
                            .path()
                            .parent()
                            .unwrap_or(&vendor_root)
                            .to_path_buf();
                        debug!(
                            package = package.name(),
                            path = %dir.display(),
                            "indexed installed package"
                        );
                        install_paths.insert(package.name().to_string(), dir);
                        packages.insert(package.name().to_string(), package);
                    }
                    Err(err) => {
                        warn!(
                            path = %entry.path().display(),
                            error = %err,
                            "ignoring unreadable package manifest"
                        );
                    }
                }
            }
        } else {
            debug!(path = %vendor_root.display(), "no vendor directory, index holds root only");
        }

        Ok(Self {
            root,
            project_root: project_root.to_path_buf(),
            packages,
            install_paths,
        })
    }

    /// Number of installed packages (excluding the root).
    pub fn installed_count(&self) -> usize {
        self.packages.len()
    }
}

impl PackageIndex for VendorIndex {
    fn root_package(&self) -> &Package {
        &self.root
    }

    fn find_package(&self, name: &str) -> Option<Package> {
        if name == self.root.name() {
            return Some(self.root.clone());
        }
        self.packages.get(name).cloned()
    }

    fn install_path(&self, name: &str) -> Option<PathBuf> {
        if name == self.root.name() {
            return Some(self.project_root.clone());
        }
        self.install_paths.get(name).cloned()
    }
}
