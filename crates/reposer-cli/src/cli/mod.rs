//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, and help text.  No business logic lives here.

use clap::{Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "reposer",
    bin_name = "reposer",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold files from installed packages into the project tree",
    long_about = "Reposer places files declared by installed packages into \
                  your project tree, following the scaffold configuration \
                  embedded in each package's metadata.",
    after_help = "EXAMPLES:\n\
        \x20 reposer resolve          # scaffold everything, overwriting stale copies\n\
        \x20 reposer quick-update     # scaffold only files that are missing\n\
        \x20 reposer -vv resolve      # same, with debug logging",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve and place every scaffold file (canonical pass).
    #[command(
        about = "Scaffold all declared files into place",
        after_help = "Runs the full resolution: allowed packages are ordered, \
                      their file mappings consolidated, and every resulting \
                      operation is applied, replacing stale copies."
    )]
    Resolve,

    /// Place only scaffold files that are missing (fast pass).
    #[command(
        name = "quick-update",
        about = "Scaffold only files missing from the project tree",
        after_help = "Runs the same resolution as `resolve` but leaves any \
                      destination that already exists untouched."
    )]
    QuickUpdate,
}

// ── tests ─────────────────────────────────────────────────────────────────────
