//! Unified error handling for Reposer Core.
//!
//! One wrapper type over the domain and application errors, with
//! categories and user-actionable suggestions the CLI layer can render.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum ReposerError {
    /// A resolution rule was violated (unknown token, malformed spec).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A collaborator behind a port failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ReposerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type ReposerResult<T> = Result<T, ReposerError>;
