//! Core domain layer for Reposer.
//!
//! Pure types and logic: packages, their scaffold options, location tables,
//! and scaffold operations. No I/O lives here — directory creation and
//! package lookup go through the ports defined in the application layer.

pub mod error;
pub mod locations;
pub mod operation;
pub mod options;
pub mod package;

pub use error::{DomainError, ErrorCategory};
pub use locations::{LocationTable, WEB_ROOT_TOKEN};
pub use operation::{ConsolidatedMapping, MappingWarning, ScaffoldFileInfo, ScaffoldOp};
pub use options::{EXTRA_KEY, ScaffoldOptions};
pub use package::Package;
