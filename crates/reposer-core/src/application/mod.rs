//! Application layer for Reposer.
//!
//! This layer contains:
//! - **Services**: the resolution engine (allowed-package ordering,
//!   mapping consolidation, location building, the handler)
//! - **Ports**: interface definitions (traits) for the package index and
//!   the directory utility
//! - **Errors**: application-specific error types
//!
//! The services coordinate the domain layer; the rules themselves live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AllowedPackageResolver, Consolidation, LocationResolver, MappingConsolidator, ScaffoldHandler,
    ScaffoldPlan,
};

pub use ports::{DirectoryMaker, PackageIndex};

pub use error::ApplicationError;
