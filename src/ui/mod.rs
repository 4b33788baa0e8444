//! User interface components
//!
//! Command-line argument definitions and their mapping into the
//! configuration overlay.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
