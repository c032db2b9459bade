//! Domain-level errors: violations the resolution logic itself can detect.

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A path template names a location token that was never declared.
    ///
    /// Fatal: resolving the template any further would place a file at a
    /// wrong path.
    #[error("path template '{template}' references unknown location token '[{token}]'")]
    UnknownToken { token: String, template: String },

    /// A single file-mapping source specification could not be understood.
    ///
    /// Recovered during consolidation: the entry is skipped and reported,
    /// the run continues.
    #[error("malformed file-mapping source specification: {reason}")]
    MalformedMapping { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownToken { token, .. } => vec![
                format!("The token '[{token}]' is not declared", token = token),
                "Declare it under the root package's `locations` table".into(),
                "Only the root package may declare locations".into(),
            ],
            Self::MalformedMapping { reason } => vec![
                format!("Entry was skipped: {}", reason),
                "A source specification is a path string, `false`, or a table with `path` and `mode`".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownToken { .. } => ErrorCategory::Configuration,
            Self::MalformedMapping { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
