//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `REPOSER_*` environment variables
//! 2. Config file (`--config` or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Project layout settings.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Manifest file name looked up in the working directory and its
    /// ancestors.
    pub manifest: String,
    /// Vendor directory, relative to the project root.
    pub vendor_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig {
                manifest: "package.toml".into(),
                vendor_dir: "vendor".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when
    /// `None`, the default location is consulted and silently skipped if
    /// absent.  Environment variables like `REPOSER_PROJECT__VENDOR_DIR`
    /// override file values.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("project.manifest", "package.toml")?
            .set_default("project.vendor_dir", "vendor")?
            .set_default("output.no_color", false)?
            .set_default("output.format", "human")?;

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone())),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        builder
            .add_source(config::Environment::with_prefix("REPOSER").separator("__"))
            .build()
            .context("failed to assemble configuration")?
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.reposer.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "reposer", "reposer")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".reposer.toml"))
    }
}
