use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Expand root paths into the list of candidate files.
///
/// Directories are walked recursively; a file is a candidate iff its
/// extension is in `file_types` (exact, case-sensitive match). The walk
/// consults no ignore files and does not skip hidden entries, and symlinked
/// directories are not followed. Nonexistent inputs yield nothing. Order is
/// implementation-defined walk order.
pub fn expand_paths(input_paths: Vec<&Path>, file_types: &HashSet<String>) -> Result<Vec<PathBuf>> {
    let mut result_paths = Vec::new();

    for path in input_paths {
        if path.is_file() {
            if has_candidate_extension(path, file_types) {
                result_paths.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            let mut builder = ignore::WalkBuilder::new(path);
            // The migration visits every file under the root, including
            // hidden and gitignored ones
            builder.standard_filters(false);

            for entry in builder.build() {
                let entry = entry?;
                let entry_path = entry.path();

                if entry_path.is_file() && has_candidate_extension(entry_path, file_types) {
                    result_paths.push(entry_path.to_path_buf());
                }
            }
        }
    }

    Ok(result_paths)
}

// Keys on a real extension rather than a raw name suffix: a dotfile named
// exactly `.tsx` has no extension and is skipped, where a bare
// ends-with-".tsx" check would take it.
fn has_candidate_extension(path: &Path, file_types: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| file_types.contains(ext))
}
