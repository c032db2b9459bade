//! Builds the per-invocation location table from the root package's options.

use tracing::debug;

use crate::application::ports::DirectoryMaker;
use crate::domain::{LocationTable, ScaffoldOptions, WEB_ROOT_TOKEN};
use crate::error::ReposerResult;

/// Turns declared location templates into canonical absolute directories.
pub struct LocationResolver;

impl LocationResolver {
    /// Build the location table for this invocation.
    ///
    /// The declared `locations` are merged with the `web_root: "./"`
    /// default, then each directory is created if missing (the engine's
    /// one permitted side effect) and canonicalized. Only the root
    /// package's options ever reach this function — dependencies may not
    /// declare locations.
    pub fn build(
        options: &ScaffoldOptions,
        dirs: &dyn DirectoryMaker,
    ) -> ReposerResult<LocationTable> {
        let mut declared = options.locations.clone();
        declared
            .entry(WEB_ROOT_TOKEN.to_string())
            .or_insert_with(|| "./".to_string());

        let mut table = LocationTable::new();
        for (token, template) in &declared {
            let path = std::path::Path::new(template);
            dirs.ensure_directory(path)?;
            let resolved = dirs.canonicalize(path)?;
            debug!(token = %token, path = %resolved.display(), "location resolved");
            table.insert(token.clone(), resolved);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockDirectoryMaker;
    use std::path::{Path, PathBuf};

    /// A mock that canonicalizes against a fixed working directory.
    fn dirs_rooted_at(root: &'static str) -> MockDirectoryMaker {
        let mut dirs = MockDirectoryMaker::new();
        dirs.expect_ensure_directory().returning(|_| Ok(()));
        dirs.expect_canonicalize().returning(move |p| {
            if p == Path::new("./") {
                Ok(PathBuf::from(root))
            } else {
                Ok(PathBuf::from(root).join(p))
            }
        });
        dirs
    }

    #[test]
    fn web_root_defaults_to_working_directory() {
        let dirs = dirs_rooted_at("/proj");
        let table = LocationResolver::build(&ScaffoldOptions::default(), &dirs).unwrap();

        assert_eq!(table.get(WEB_ROOT_TOKEN), Some(Path::new("/proj")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn default_web_root_interpolates_under_working_directory() {
        let dirs = dirs_rooted_at("/proj");
        let table = LocationResolver::build(&ScaffoldOptions::default(), &dirs).unwrap();

        assert_eq!(
            table.interpolate("[web_root]/sites/default").unwrap(),
            "/proj/sites/default"
        );
    }

    #[test]
    fn declared_locations_are_resolved_and_kept() {
        let mut options = ScaffoldOptions::default();
        options.locations.insert("web_root".into(), "web".into());
        options
            .locations
            .insert("config_dir".into(), "config/sync".into());

        let dirs = dirs_rooted_at("/proj");
        let table = LocationResolver::build(&options, &dirs).unwrap();

        assert_eq!(table.get("web_root"), Some(Path::new("/proj/web")));
        assert_eq!(
            table.get("config_dir"),
            Some(Path::new("/proj/config/sync"))
        );
    }

    #[test]
    fn every_location_directory_is_created() {
        let mut options = ScaffoldOptions::default();
        options.locations.insert("web_root".into(), "web".into());

        let mut dirs = MockDirectoryMaker::new();
        dirs.expect_ensure_directory()
            .withf(|p| p == Path::new("web"))
            .times(1)
            .returning(|_| Ok(()));
        dirs.expect_canonicalize()
            .returning(|p| Ok(PathBuf::from("/proj").join(p)));

        LocationResolver::build(&options, &dirs).unwrap();
    }

    #[test]
    fn directory_failure_propagates() {
        use crate::application::ApplicationError;

        let mut dirs = MockDirectoryMaker::new();
        dirs.expect_ensure_directory().returning(|p| {
            Err(ApplicationError::Filesystem {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        assert!(LocationResolver::build(&ScaffoldOptions::default(), &dirs).is_err());
    }
}
