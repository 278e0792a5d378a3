//! Locating the install and source directories

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Return the first candidate path that exists
pub fn find_install_dir<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    for candidate in candidates {
        let path: &Path = candidate.as_ref();
        let exists = path.exists();
        tracing::debug!(candidate = %path.display(), exists, "probing install dir");
        if exists {
            return Some(path.to_path_buf());
        }
    }
    None
}

/// Walk `root` and return the first directory named `name`
///
/// Each directory's children are checked for `name` before any of them is
/// descended into; subdirectories are then searched in name order.
/// A child that is a symlink to a directory matches but is never entered.
/// Entries that cannot be read are skipped.
pub fn find_source_dir(root: &Path, name: &str) -> Option<PathBuf> {
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut subdirs = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_name() == name && entry.path().is_dir() {
                return Some(entry.into_path());
            }
            if entry.file_type().is_dir() {
                subdirs.push(entry.into_path());
            }
        }
        // Reversed so the first sibling is searched first.
        pending.extend(subdirs.into_iter().rev());
    }

    None
}
