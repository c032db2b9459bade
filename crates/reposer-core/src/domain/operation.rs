//! Scaffold operations and the consolidated file mapping.

use std::collections::BTreeMap;

use serde_json::Value;

use super::DomainError;

/// What to do for one destination path.
///
/// The known operation kinds are closed and enumerable, so they live in a
/// tagged enum. Source paths are relative to the contributing package's
/// install directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOp {
    /// Copy the source file over the destination.
    Copy { source: String },
    /// Symlink the destination to the source.
    Symlink { source: String },
    /// Leave the destination alone. Declared as `false` in a file mapping;
    /// used by packages to retract a file an earlier package contributed.
    Skip,
}

impl ScaffoldOp {
    /// Build an operation from a raw source specification.
    ///
    /// Accepted shapes:
    /// - `"relative/path"` — copy
    /// - `false` — skip
    /// - `{ "path": "relative/path", "mode": "copy" | "symlink" | "skip" }`
    ///   (mode defaults to `copy`)
    pub fn from_spec(spec: &Value) -> Result<Self, DomainError> {
        match spec {
            Value::String(path) if !path.is_empty() => Ok(Self::Copy {
                source: path.clone(),
            }),
            Value::String(_) => Err(malformed("source path is empty")),
            Value::Bool(false) => Ok(Self::Skip),
            Value::Bool(true) => Err(malformed("`true` is not a valid source specification")),
            Value::Object(table) => {
                let mode = match table.get("mode") {
                    None => "copy",
                    Some(Value::String(m)) => m.as_str(),
                    Some(_) => return Err(malformed("`mode` must be a string")),
                };

                let path = table.get("path").and_then(Value::as_str);
                match (mode, path) {
                    ("skip", _) => Ok(Self::Skip),
                    ("copy", Some(p)) if !p.is_empty() => Ok(Self::Copy { source: p.into() }),
                    ("symlink", Some(p)) if !p.is_empty() => {
                        Ok(Self::Symlink { source: p.into() })
                    }
                    ("copy" | "symlink", _) => {
                        Err(malformed(&format!("mode '{mode}' requires a `path`")))
                    }
                    (other, _) => Err(malformed(&format!("unknown mode '{other}'"))),
                }
            }
            other => Err(malformed(&format!(
                "expected string, false, or table, got {other}"
            ))),
        }
    }

    /// The source path, for operations that have one.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Copy { source } | Self::Symlink { source } => Some(source),
            Self::Skip => None,
        }
    }
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedMapping {
        reason: reason.to_string(),
    }
}

/// One consolidated entry: the operation plus the package it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldFileInfo {
    pub op: ScaffoldOp,
    /// Contributing package name, kept for diagnostics and for resolving
    /// the operation's source against the right install directory.
    pub package: String,
}

/// Destination path template → winning operation.
///
/// Exactly one entry per destination; the recorded package is the last
/// (highest-priority) one that declared it. Destination order carries no
/// meaning beyond determinism.
pub type ConsolidatedMapping = BTreeMap<String, ScaffoldFileInfo>;

/// A malformed file-mapping entry that was skipped during consolidation.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingWarning {
    pub package: String,
    pub destination: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_is_copy() {
        assert_eq!(
            ScaffoldOp::from_spec(&json!("assets/robots.txt")).unwrap(),
            ScaffoldOp::Copy {
                source: "assets/robots.txt".into()
            }
        );
    }

    #[test]
    fn false_is_skip() {
        assert_eq!(ScaffoldOp::from_spec(&json!(false)).unwrap(), ScaffoldOp::Skip);
    }

    #[test]
    fn table_with_symlink_mode() {
        let op = ScaffoldOp::from_spec(&json!({ "path": "assets/index.php", "mode": "symlink" }))
            .unwrap();
        assert_eq!(
            op,
            ScaffoldOp::Symlink {
                source: "assets/index.php".into()
            }
        );
    }

    #[test]
    fn table_mode_defaults_to_copy() {
        let op = ScaffoldOp::from_spec(&json!({ "path": "a.txt" })).unwrap();
        assert_eq!(op, ScaffoldOp::Copy { source: "a.txt".into() });
    }

    #[test]
    fn skip_mode_needs_no_path() {
        assert_eq!(
            ScaffoldOp::from_spec(&json!({ "mode": "skip" })).unwrap(),
            ScaffoldOp::Skip
        );
    }

    #[test]
    fn true_is_malformed() {
        assert!(ScaffoldOp::from_spec(&json!(true)).is_err());
    }

    #[test]
    fn empty_path_is_malformed() {
        assert!(ScaffoldOp::from_spec(&json!("")).is_err());
        assert!(ScaffoldOp::from_spec(&json!({ "path": "", "mode": "copy" })).is_err());
    }

    #[test]
    fn unknown_mode_is_malformed() {
        let err = ScaffoldOp::from_spec(&json!({ "path": "a", "mode": "append" })).unwrap_err();
        assert!(err.to_string().contains("append"));
    }

    #[test]
    fn missing_path_for_symlink_is_malformed() {
        assert!(ScaffoldOp::from_spec(&json!({ "mode": "symlink" })).is_err());
    }

    #[test]
    fn numbers_are_malformed() {
        assert!(ScaffoldOp::from_spec(&json!(42)).is_err());
    }

    #[test]
    fn source_accessor() {
        assert_eq!(
            ScaffoldOp::from_spec(&json!("a.txt")).unwrap().source(),
            Some("a.txt")
        );
        assert_eq!(ScaffoldOp::Skip.source(), None);
    }
}
