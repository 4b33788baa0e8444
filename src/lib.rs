//! rebrand - migrate brand tokens across a source tree
//!
//! The crate is organized around three stages: `discovery` enumerates
//! candidate files under a root directory, `rewrite` applies the ordered
//! substitution rules (with link-preservation exceptions) to file content,
//! and `migration` glues the two to the filesystem with per-file error
//! isolation. `config` and `ui` supply the TOML/CLI surface and `reporting`
//! the structured logging.

pub mod config;
pub mod core;
pub mod discovery;
pub mod migration;
pub mod reporting;
pub mod rewrite;
pub mod ui;

// Re-export commonly used items at the crate root
pub use crate::core::error::{RebrandError, Result};
pub use crate::core::types::{ExceptionRule, PatternRule};
pub use crate::migration::{MigrateFiles, MigrationSummary, Migrator};
pub use crate::rewrite::{RewriteText, Rewriter, Ruleset};
