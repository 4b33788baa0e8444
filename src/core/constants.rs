/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values the original migration relied
/// on: the default root directory, the extension allow-list, and the exact
/// console message forms.
/// Default traversal values
pub mod paths {
    /// Root directory processed when no path argument is given
    pub const DEFAULT_ROOT: &str = "src";
}

/// File processing constants
pub mod files {
    /// Extensions eligible for read/transform/write processing.
    /// Matching is exact and case-sensitive.
    pub const DEFAULT_FILE_TYPES: [&str; 6] = ["tsx", "ts", "js", "json", "html", "css"];
}

/// Configuration file locations
pub mod config_files {
    /// Standard config file name looked up in the working directory
    pub const STANDARD_NAME: &str = ".rebrand.toml";
    /// How many parent directories to search for the standard config file
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

/// Console message constants
pub mod messages {
    /// Prefix printed to stdout for each rewritten file
    pub const UPDATED_PREFIX: &str = "Updated: ";
    /// Prefix printed to stderr for each per-file failure
    pub const ERROR_PREFIX: &str = "Error processing ";
    /// Final line printed when the run finishes
    pub const MIGRATION_COMPLETE: &str = "Migration complete.";
}
