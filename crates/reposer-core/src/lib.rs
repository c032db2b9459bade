//! Reposer Core — the scaffold resolution engine.
//!
//! Reposer lets installed packages contribute files to the project tree
//! ("scaffolding"), driven by configuration under a `reposer` key in each
//! package's metadata. This crate is the engine: it decides, in a
//! deterministic priority order, which packages may contribute, folds
//! their file mappings into one consolidated mapping (later packages
//! override earlier ones), and resolves symbolic location tokens such as
//! `[web_root]` into absolute directories.
//!
//! ```text
//! root options ──► AllowedPackageResolver ──► ordered package list
//!                                                    │
//!                      LocationResolver              ▼
//!                            │            MappingConsolidator
//!                            ▼                      │
//!                      LocationTable                ▼
//!                            └────────► ScaffoldPlan ◄┘
//! ```
//!
//! The engine is synchronous and recomputes everything per invocation.
//! All I/O goes through the ports in [`application::ports`]; the
//! `reposer-adapters` crate provides the installed-tree index, the local
//! directory utility, and the operation executor that applies a plan.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldHandler, ScaffoldPlan,
        ports::{DirectoryMaker, PackageIndex},
    };
    pub use crate::domain::{
        ConsolidatedMapping, LocationTable, MappingWarning, Package, ScaffoldFileInfo, ScaffoldOp,
        ScaffoldOptions,
    };
    pub use crate::error::{ReposerError, ReposerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
