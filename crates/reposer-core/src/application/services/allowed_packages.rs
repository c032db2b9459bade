//! Computes the ordered list of packages allowed to contribute scaffold
//! files.

use std::collections::HashSet;

use tracing::debug;

use crate::application::ports::PackageIndex;
use crate::domain::{Package, ScaffoldOptions};

/// Resolves the root configuration into an ordered, duplicate-free list of
/// package names. Later entries override earlier ones downstream, so list
/// position is priority.
pub struct AllowedPackageResolver<'a> {
    index: &'a dyn PackageIndex,
}

/// One traversal frame: a package plus a cursor into its own declared
/// allowed packages. The explicit stack bounds memory by the number of
/// distinct packages and makes cycle handling an ordinary branch instead
/// of a recursion guard.
struct Frame {
    name: String,
    children: Vec<String>,
    next: usize,
}

impl<'a> AllowedPackageResolver<'a> {
    pub fn new(index: &'a dyn PackageIndex) -> Self {
        Self { index }
    }

    /// Resolve the allowed-package list for the given root options.
    ///
    /// Traversal is depth-first over each package's own `allowed-packages`
    /// declaration, dependencies first, so a package's collaborators always
    /// sort ahead of it. Each package appears once, at the position of its
    /// first visit. Names absent from the index are skipped silently —
    /// optional scaffolding sources are expected to be missing sometimes.
    ///
    /// If the root package declares any file mapping it is (re)appended at
    /// the tail, so its own mappings always win.
    pub fn resolve(&self, root_options: &ScaffoldOptions) -> Vec<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut ordered: Vec<String> = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        for declared in &root_options.allowed_packages {
            self.enter(declared, &mut visited, &mut stack);

            while let Some(frame) = stack.last_mut() {
                match frame.children.get(frame.next).cloned() {
                    Some(child) => {
                        frame.next += 1;
                        self.enter(&child, &mut visited, &mut stack);
                    }
                    None => {
                        // All collaborators listed; the package itself
                        // follows them.
                        let name = std::mem::take(&mut frame.name);
                        stack.pop();
                        ordered.push(name);
                    }
                }
            }
        }

        if !root_options.file_mapping.is_empty() {
            let root_name = self.index.root_package().name().to_string();
            ordered.retain(|name| *name != root_name);
            ordered.push(root_name);
        }

        ordered
    }

    /// Push a traversal frame for `name` unless it was already visited or
    /// is not present in the index.
    fn enter(&self, name: &str, visited: &mut HashSet<String>, stack: &mut Vec<Frame>) {
        if visited.contains(name) {
            // First visit wins position; repeat references (including
            // cycles back into the current stack) are ignored.
            return;
        }

        let Some(package) = self.index.find_package(name) else {
            debug!(package = name, "allowed package not installed, skipping");
            return;
        };

        visited.insert(name.to_string());
        let children = Self::declared_allowed(&package);
        stack.push(Frame {
            name: name.to_string(),
            children,
            next: 0,
        });
    }

    fn declared_allowed(package: &Package) -> Vec<String> {
        ScaffoldOptions::for_package(package).allowed_packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixtures::IndexFixture;
    use serde_json::json;

    #[test]
    fn dependency_first_ordering() {
        // A allows nothing, B allows A, root allows B and maps a file.
        let index = IndexFixture::new("root")
            .root_block(json!({
                "allowed-packages": ["b"],
                "file-mapping": { "[web_root]/x.txt": "assets/x.txt" },
            }))
            .package("a", json!({}))
            .package("b", json!({ "allowed-packages": ["a"] }));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["a", "b", "root"]);
    }

    #[test]
    fn list_never_contains_duplicates() {
        let index = IndexFixture::new("root")
            .root_block(json!({ "allowed-packages": ["a", "b", "a"] }))
            .package("a", json!({}))
            .package("b", json!({ "allowed-packages": ["a"] }));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["a", "b"]);
    }

    #[test]
    fn first_visit_position_is_preserved() {
        // `a` is referenced directly first and transitively later; it keeps
        // its first position.
        let index = IndexFixture::new("root")
            .root_block(json!({ "allowed-packages": ["a", "b"] }))
            .package("a", json!({}))
            .package("b", json!({ "allowed-packages": ["a", "c"] }))
            .package("c", json!({}));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["a", "c", "b"]);
    }

    #[test]
    fn missing_packages_are_silently_skipped() {
        let index = IndexFixture::new("root")
            .root_block(json!({ "allowed-packages": ["ghost", "a"] }))
            .package("a", json!({}));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["a"]);
    }

    #[test]
    fn cycles_terminate_without_duplicates() {
        let index = IndexFixture::new("root")
            .root_block(json!({ "allowed-packages": ["a"] }))
            .package("a", json!({ "allowed-packages": ["b"] }))
            .package("b", json!({ "allowed-packages": ["a"] }));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["b", "a"]);
    }

    #[test]
    fn root_with_mappings_moves_to_tail() {
        // root is reachable transitively but must still end up last.
        let index = IndexFixture::new("root")
            .root_block(json!({
                "allowed-packages": ["a"],
                "file-mapping": { "[web_root]/x.txt": "assets/x.txt" },
            }))
            .package("a", json!({ "allowed-packages": ["root"] }));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["a", "root"]);
    }

    #[test]
    fn root_without_mappings_is_not_appended() {
        let index = IndexFixture::new("root")
            .root_block(json!({ "allowed-packages": ["a"] }))
            .package("a", json!({}));

        let options = index.root_options();
        let resolved = AllowedPackageResolver::new(&index).resolve(&options);

        assert_eq!(resolved, ["a"]);
    }

    #[test]
    fn empty_configuration_resolves_to_empty_list() {
        let index = IndexFixture::new("root").root_block(json!({}));
        let options = index.root_options();

        assert!(AllowedPackageResolver::new(&index).resolve(&options).is_empty());
    }
}
