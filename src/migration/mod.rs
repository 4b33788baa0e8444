//! File-level migration driver
//!
//! This module glues discovery and rewriting to the filesystem: each
//! candidate file is read, transformed, and conditionally overwritten,
//! with per-file failures reported and never fatal to the run.

pub mod runner;

// Re-export commonly used items
pub use runner::{MigrateFiles, MigrationSummary, Migrator};
