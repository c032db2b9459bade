//! In-memory package index for testing.

use std::collections::HashMap;
use std::path::PathBuf;

use reposer_core::application::ports::PackageIndex;
use reposer_core::domain::Package;

/// Builder-style index holding packages entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryIndex {
    root: Package,
    root_path: Option<PathBuf>,
    packages: HashMap<String, Package>,
    install_paths: HashMap<String, PathBuf>,
}

impl MemoryIndex {
    /// Create an index with the given root package.
    pub fn new(root: Package) -> Self {
        Self {
            root,
            root_path: None,
            packages: HashMap::new(),
            install_paths: HashMap::new(),
        }
    }

    /// Set the root package's install directory.
    pub fn with_root_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_path = Some(path.into());
        self
    }

    /// Add an installed package without an install directory.
    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.insert(package.name().to_string(), package);
        self
    }

    /// Add an installed package together with its install directory.
    pub fn with_installed(mut self, package: Package, path: impl Into<PathBuf>) -> Self {
        self.install_paths
            .insert(package.name().to_string(), path.into());
        self.with_package(package)
    }
}

impl PackageIndex for MemoryIndex {
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
            return self.root_path.clone();
        }
        self.install_paths.get(name).cloned()
    }
}
