//! Merges the file mappings of every allowed package into one
//! destination-keyed mapping.

use tracing::{debug, warn};

use crate::application::ports::PackageIndex;
use crate::domain::{
    ConsolidatedMapping, MappingWarning, ScaffoldFileInfo, ScaffoldOp, ScaffoldOptions,
};

/// Result of a consolidation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consolidation {
    pub mapping: ConsolidatedMapping,
    pub warnings: Vec<MappingWarning>,
}

/// Folds per-package file mappings together, later packages overriding
/// earlier ones for the same destination.
pub struct MappingConsolidator<'a> {
    index: &'a dyn PackageIndex,
}

impl<'a> MappingConsolidator<'a> {
    pub fn new(index: &'a dyn PackageIndex) -> Self {
        Self { index }
    }

    /// Consolidate the mappings of `allowed` (lowest to highest priority).
    ///
    /// A malformed entry is recorded as a warning attributed to its owning
    /// package and skipped; it never aborts the remaining entries or
    /// packages.
    pub fn consolidate(&self, allowed: &[String]) -> Consolidation {
        let mut result = Consolidation::default();

        for name in allowed {
            let Some(package) = self.index.find_package(name) else {
                debug!(package = %name, "allowed package not installed, nothing to contribute");
                continue;
            };

            let options = ScaffoldOptions::for_package(&package);
            for (destination, spec) in &options.file_mapping {
                match ScaffoldOp::from_spec(spec) {
                    Ok(op) => {
                        result.mapping.insert(
                            destination.clone(),
                            ScaffoldFileInfo {
                                op,
                                package: name.clone(),
                            },
                        );
                    }
                    Err(err) => {
                        let reason = err.to_string();
                        warn!(
                            package = %name,
                            destination = %destination,
                            %reason,
                            "skipping malformed file-mapping entry"
                        );
                        result.warnings.push(MappingWarning {
                            package: name.clone(),
                            destination: destination.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixtures::IndexFixture;
    use serde_json::json;

    #[test]
    fn later_package_wins_shared_destination() {
        let index = IndexFixture::new("root")
            .root_block(json!({}))
            .package("low", json!({
                "file-mapping": {
                    "[web_root]/robots.txt": "low/robots.txt",
                    "[web_root]/only-low.txt": "low/only.txt",
                },
            }))
            .package("high", json!({
                "file-mapping": { "[web_root]/robots.txt": "high/robots.txt" },
            }));

        let allowed = vec!["low".to_string(), "high".to_string()];
        let result = MappingConsolidator::new(&index).consolidate(&allowed);

        let winner = &result.mapping["[web_root]/robots.txt"];
        assert_eq!(winner.package, "high");
        assert_eq!(winner.op.source(), Some("high/robots.txt"));

        // The non-contested entry survives from the lower-priority package.
        assert_eq!(result.mapping["[web_root]/only-low.txt"].package, "low");
        assert_eq!(result.mapping.len(), 2);
    }

    #[test]
    fn consolidation_is_idempotent() {
        let index = IndexFixture::new("root")
            .root_block(json!({}))
            .package("a", json!({
                "file-mapping": {
                    "[web_root]/one.txt": "assets/one.txt",
                    "[web_root]/two.txt": false,
                },
            }));

        let allowed = vec!["a".to_string()];
        let consolidator = MappingConsolidator::new(&index);

        assert_eq!(
            consolidator.consolidate(&allowed),
            consolidator.consolidate(&allowed)
        );
    }

    #[test]
    fn malformed_entry_warns_and_does_not_abort() {
        let index = IndexFixture::new("root")
            .root_block(json!({}))
            .package("broken", json!({
                "file-mapping": {
                    "[web_root]/bad.txt": true,
                    "[web_root]/good.txt": "assets/good.txt",
                },
            }))
            .package("after", json!({
                "file-mapping": { "[web_root]/later.txt": "assets/later.txt" },
            }));

        let allowed = vec!["broken".to_string(), "after".to_string()];
        let result = MappingConsolidator::new(&index).consolidate(&allowed);

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].package, "broken");
        assert_eq!(result.warnings[0].destination, "[web_root]/bad.txt");

        // Both the sibling entry and the following package still land.
        assert!(result.mapping.contains_key("[web_root]/good.txt"));
        assert!(result.mapping.contains_key("[web_root]/later.txt"));
        assert!(!result.mapping.contains_key("[web_root]/bad.txt"));
    }

    #[test]
    fn skip_entries_are_kept_as_operations() {
        // A later package retracting a file is itself an operation and must
        // override the earlier copy.
        let index = IndexFixture::new("root")
            .root_block(json!({}))
            .package("gives", json!({
                "file-mapping": { "[web_root]/.htaccess": "assets/.htaccess" },
            }))
            .package("retracts", json!({
                "file-mapping": { "[web_root]/.htaccess": false },
            }));

        let allowed = vec!["gives".to_string(), "retracts".to_string()];
        let result = MappingConsolidator::new(&index).consolidate(&allowed);

        assert_eq!(result.mapping["[web_root]/.htaccess"].op, ScaffoldOp::Skip);
        assert_eq!(result.mapping["[web_root]/.htaccess"].package, "retracts");
    }

    #[test]
    fn vanished_package_contributes_nothing() {
        let index = IndexFixture::new("root").root_block(json!({}));

        let allowed = vec!["ghost".to_string()];
        let result = MappingConsolidator::new(&index).consolidate(&allowed);

        assert!(result.mapping.is_empty());
        assert!(result.warnings.is_empty());
    }
}
