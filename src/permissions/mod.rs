//! Mode normalization for installed scripts

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, UpdateError};
use crate::model::ScriptKind;
use crate::utils::fs::set_mode;

/// Set `.py` files to 0644 and `.sh` files to 0755 across the whole tree under `root`
///
/// Other files are untouched. Symlinks are neither followed nor changed.
/// Returns the paths whose mode was set.
pub fn normalize_permissions(root: &Path) -> Result<Vec<PathBuf>> {
    let mut changed = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| UpdateError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = ScriptKind::from_path(entry.path()) else {
            continue;
        };

        set_mode(entry.path(), kind.mode())?;
        tracing::debug!(path = %entry.path().display(), mode = %format!("{:o}", kind.mode()), "chmod");
        changed.push(entry.into_path());
    }

    Ok(changed)
}
