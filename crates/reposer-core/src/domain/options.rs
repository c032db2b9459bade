//! Per-package scaffold configuration, read from the `reposer` entry of the
//! package's extra-configuration block.
//!
//! Reading is total: a package without the entry, or with keys of the wrong
//! shape, yields empty collections. Each key degrades independently, so a
//! broken `locations` table does not discard a valid `allowed-packages`
//! list next to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::Package;

/// The metadata key the engine owns inside a package's extra block.
pub const EXTRA_KEY: &str = "reposer";

/// Scaffold configuration for one package.
///
/// `locations` is honored for the root package only (the handler never
/// builds a location table from a dependency's options). `file-mapping`
/// values stay raw JSON here; they are interpreted entry by entry during
/// consolidation so one malformed entry cannot poison its neighbours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldOptions {
    pub locations: BTreeMap<String, String>,

    #[serde(rename = "allowed-packages")]
    pub allowed_packages: Vec<String>,

    #[serde(rename = "file-mapping")]
    pub file_mapping: BTreeMap<String, Value>,
}

impl ScaffoldOptions {
    /// Read the scaffold options declared by `package`.
    ///
    /// Never fails; absent or malformed data defaults key by key.
    pub fn for_package(package: &Package) -> Self {
        let Some(block) = package.extra().get(EXTRA_KEY) else {
            return Self::default();
        };

        let Some(table) = block.as_object() else {
            debug!(
                package = package.name(),
                "scaffold configuration is not a table, using defaults"
            );
            return Self::default();
        };

        Self {
            locations: table
                .get("locations")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default(),
            allowed_packages: table
                .get("allowed-packages")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default(),
            file_mapping: table
                .get("file-mapping")
                .and_then(Value::as_object)
                .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                .unwrap_or_default(),
        }
    }
}
