//! In-memory directory utility for testing.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, RwLock};

use reposer_core::application::ports::DirectoryMaker;
use reposer_core::error::ReposerResult;

/// Directory utility that records creations and canonicalizes by pure path
/// arithmetic against a configured root. No disk involved.
#[derive(Debug, Clone)]
pub struct MemoryDirs {
    root: PathBuf,
    created: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryDirs {
    /// Create a utility whose relative paths resolve under `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            created: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Directories created so far, sorted (testing helper).
    pub fn created(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = match self.created.read() {
            Ok(created) => created.iter().cloned().collect(),
            Err(_) => Vec::new(),
        };
        dirs.sort();
        dirs
    }

    fn normalize(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        let mut out = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    out.pop();
                }
                other => out.push(other),
            }
        }
        out
    }
}

impl DirectoryMaker for MemoryDirs {
    fn ensure_directory(&self, path: &Path) -> ReposerResult<()> {
        if let Ok(mut created) = self.created.write() {
            created.insert(self.normalize(path));
        }
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> ReposerResult<PathBuf> {
        Ok(self.normalize(path))
    }
}
