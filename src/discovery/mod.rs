//! Candidate file discovery
//!
//! This module handles directory traversal and the extension allow-list
//! that decides which files are eligible for rewriting.

pub mod path_utils;

// Re-export commonly used items
pub use path_utils::expand_paths;
