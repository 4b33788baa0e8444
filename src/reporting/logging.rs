use log::{debug, info, warn};

use std::path::Path;

use crate::config::Config;
use crate::migration::MigrationSummary;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, substitutions: usize, exceptions: usize) {
    info!(
        "Configuration: root={}, file_types={:?}",
        config.root_path(),
        config.file_types_as_set()
    );
    info!("Rules: {substitutions} substitution(s), {exceptions} exception(s)");
}

/// Log file discovery information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Processing {file_count} candidate file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log migration completion
pub fn log_migration_complete(summary: &MigrationSummary, duration_ms: u128) {
    if summary.failed.is_empty() {
        info!(
            "Migration complete: {} updated, {} unchanged ({duration_ms}ms)",
            summary.updated.len(),
            summary.unchanged,
        );
    } else {
        warn!(
            "Migration complete with errors: {} updated, {} unchanged, {} failed ({duration_ms}ms)",
            summary.updated.len(),
            summary.unchanged,
            summary.failed.len(),
        );
    }
}
