//! Directory utility against the real filesystem, rooted at the project
//! directory so relative location templates resolve against the project
//! rather than whatever the process working directory happens to be.

use std::io;
use std::path::{Path, PathBuf};

use reposer_core::application::ports::DirectoryMaker;
use reposer_core::error::ReposerResult;

/// Production directory utility using `std::fs`.
#[derive(Debug, Clone)]
pub struct LocalDirs {
    root: PathBuf,
}

impl LocalDirs {
    /// Create a directory utility that resolves relative paths under `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl DirectoryMaker for LocalDirs {
    fn ensure_directory(&self, path: &Path) -> ReposerResult<()> {
        // create_dir_all is a no-op on an existing directory.
        std::fs::create_dir_all(self.absolute(path))
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn canonicalize(&self, path: &Path) -> ReposerResult<PathBuf> {
        std::fs::canonicalize(self.absolute(path))
            .map_err(|e| map_io_error(path, e, "canonicalize path"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> reposer_core::error::ReposerError {
    use reposer_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
