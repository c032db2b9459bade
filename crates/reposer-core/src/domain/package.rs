//! The engine's read-only view of an installed package.

use serde_json::{Map, Value};

/// A package as seen by the scaffold engine.
///
/// Identity is the unique package name. The `extra` block is the opaque
/// key-value metadata the host package manager attaches to every package;
/// the engine only ever reads the `reposer` entry inside it. Never mutated
/// by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: String,
    extra: Map<String, Value>,
    dependencies: Vec<String>,
}

impl Package {
    /// Create a package with no metadata and no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
            dependencies: Vec::new(),
        }
    }

    /// Attach the extra-configuration block.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Attach the direct dependency names.
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}
