use log::debug;

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::messages;
use crate::rewrite::{RewriteText, Rewriter};

pub trait MigrateFiles {
    fn migrate(&self, paths: &[PathBuf]) -> MigrationSummary;
}

/// Outcome of one migration run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Files whose content changed and was written back
    pub updated: Vec<PathBuf>,
    /// Files whose transformed content was identical to the original
    pub unchanged: usize,
    /// Files that could not be read or written, with the error detail
    pub failed: Vec<(PathBuf, String)>,
}

impl MigrationSummary {
    pub fn total(&self) -> usize {
        self.updated.len() + self.unchanged + self.failed.len()
    }
}

/// Sequential file-level driver.
///
/// Files are processed one at a time, start to finish: read the whole
/// content as UTF-8, transform, and overwrite in place only when the result
/// differs by exact string inequality. Every rewritten file gets an
/// `Updated: <path>` line on stdout; every per-file failure gets an
/// `Error processing <path>: <detail>` line on stderr and the run continues.
#[derive(Debug)]
pub struct Migrator<'a> {
    rewriter: &'a Rewriter,
}

impl<'a> Migrator<'a> {
    pub fn new(rewriter: &'a Rewriter) -> Self {
        Self { rewriter }
    }

    /// Process a single file. `Ok(true)` means the file was rewritten.
    fn migrate_file(&self, path: &Path) -> std::io::Result<bool> {
        let content = fs::read_to_string(path)?;
        let transformed = self.rewriter.transform(&content);

        if transformed == content {
            debug!("Unchanged: {}", path.display());
            return Ok(false);
        }

        fs::write(path, transformed)?;
        Ok(true)
    }
}

impl MigrateFiles for Migrator<'_> {
    fn migrate(&self, paths: &[PathBuf]) -> MigrationSummary {
        let mut summary = MigrationSummary::default();

        for path in paths {
            match self.migrate_file(path) {
                Ok(true) => {
                    println!("{}{}", messages::UPDATED_PREFIX, path.display());
                    summary.updated.push(path.clone());
                }
                Ok(false) => summary.unchanged += 1,
                Err(err) => {
                    eprintln!("{}{}: {}", messages::ERROR_PREFIX, path.display(), err);
                    summary.failed.push((path.clone(), err.to_string()));
                }
            }
        }

        summary
    }
}
