//! Package manifest parsing and discovery.
//!
//! A manifest is a TOML file with a `[package]` table naming the package,
//! an optional `[dependencies]` table, and an optional `[extra]` table —
//! the opaque metadata block the engine reads its `reposer` entry from.
//! The extra block is converted to JSON values before crossing into the
//! core, which keeps the core independent of the on-disk format.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use reposer_core::application::ApplicationError;
use reposer_core::domain::Package;
use reposer_core::error::ReposerResult;

/// Manifest file name used when configuration does not override it.
pub const DEFAULT_MANIFEST: &str = "package.toml";

#[derive(Debug, Deserialize)]
struct RawManifest {
    package: RawPackage,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    extra: toml::Table,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
}

/// Load a package manifest from disk.
pub fn load_package(path: &Path) -> ReposerResult<Package> {
    let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::Manifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_package(&text, path)
}

/// Parse a manifest from text; `path` is only used in error messages.
pub fn parse_package(text: &str, path: &Path) -> ReposerResult<Package> {
    let raw: RawManifest = toml::from_str(text).map_err(|e| ApplicationError::Manifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let extra = match toml_value_to_json(&toml::Value::Table(raw.extra)) {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    Ok(Package::new(raw.package.name)
        .with_dependencies(raw.dependencies.into_keys().collect())
        .with_extra(extra))
}

/// Find the project manifest by walking up from `start`.
pub fn find_manifest_from(start: &Path, file_name: &str) -> ReposerResult<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        current = dir.parent();
    }
    Err(ApplicationError::ManifestNotFound {
        start: start.to_path_buf(),
    }
    .into())
}

/// Convert a TOML value into its JSON counterpart.
fn toml_value_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::Number((*i).into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(values) => {
            serde_json::Value::Array(values.iter().map(toml_value_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_value_to_json(v)))
                .collect(),
        ),
    }
}
