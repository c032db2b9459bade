//! Application layer errors.
//!
//! These represent failures of the external collaborators reached through
//! ports, not violations of the resolution rules themselves (those are
//! `DomainError` from `crate::domain`).

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while driving the ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem operation failed (directory creation, canonicalization,
    /// copying a scaffold file, ...).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A package manifest exists but could not be parsed.
    #[error("invalid package manifest at {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    /// No project manifest was found walking up from the starting directory.
    #[error("no package manifest found searching upward from {start}")]
    ManifestNotFound { start: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Manifest { path, .. } => vec![
                format!("Fix the manifest at {}", path.display()),
                "The file must be valid TOML with a [package] table naming the package".into(),
            ],
            Self::ManifestNotFound { start } => vec![
                format!("No manifest found from {} upward", start.display()),
                "Run from inside a project directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::Manifest { .. } => ErrorCategory::Configuration,
            Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
