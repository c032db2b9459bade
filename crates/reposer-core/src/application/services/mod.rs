//! Application services: the resolution engine proper.

pub mod allowed_packages;
pub mod consolidator;
pub mod handler;
pub mod locations;

pub use allowed_packages::AllowedPackageResolver;
pub use consolidator::{Consolidation, MappingConsolidator};
pub use handler::{ScaffoldHandler, ScaffoldPlan};
pub use locations::LocationResolver;

#[cfg(test)]
pub(crate) mod fixtures {
    //! Minimal in-memory index for service tests.

    use std::collections::HashMap;
    use std::path::PathBuf;

    use serde_json::{Map, Value};

    use crate::application::ports::PackageIndex;
    use crate::domain::{EXTRA_KEY, Package, ScaffoldOptions};

    pub(crate) struct IndexFixture {
        root: Package,
        packages: HashMap<String, Package>,
    }

    impl IndexFixture {
        pub fn new(root_name: &str) -> Self {
            Self {
                root: Package::new(root_name),
                packages: HashMap::new(),
            }
        }

        /// Set the root package's `reposer` block.
        pub fn root_block(mut self, block: Value) -> Self {
            self.root = package_with_block(self.root.name().to_string(), block);
            self
        }

        /// Add an installed package with the given `reposer` block.
        pub fn package(mut self, name: &str, block: Value) -> Self {
            self.packages
                .insert(name.to_string(), package_with_block(name.to_string(), block));
            self
        }

        pub fn root_options(&self) -> ScaffoldOptions {
            ScaffoldOptions::for_package(&self.root)
        }
    }

    fn package_with_block(name: String, block: Value) -> Package {
        let mut extra = Map::new();
        extra.insert(EXTRA_KEY.into(), block);
        Package::new(name).with_extra(extra)
    }

    impl PackageIndex for IndexFixture {
        fn root_package(&self) -> &Package {
            &self.root
        }

        fn find_package(&self, name: &str) -> Option<Package> {
            if name == self.root.name() {
                return Some(self.root.clone());
            }
            self.packages.get(name).cloned()
        }

        fn install_path(&self, _name: &str) -> Option<PathBuf> {
            None
        }
    }
}
