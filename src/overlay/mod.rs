//! Overlaying new driver files onto the install directory

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, UpdateError};
use crate::model::ScriptKind;
use crate::utils::fs::{copy_preserving, ensure_dir};

/// A file copied from the source tree into the install tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedFile {
    /// Path relative to both roots
    pub relative: PathBuf,
    pub destination: PathBuf,
}

/// Copy every `.py`/`.sh` file under `source_dir` to the same relative path under `install_dir`
///
/// Missing subdirectories are created. Files already at the destination are
/// overwritten without a backup. `on_replaced` runs after each copy.
pub fn overlay_scripts<F>(
    install_dir: &Path,
    source_dir: &Path,
    mut on_replaced: F,
) -> Result<Vec<ReplacedFile>>
where
    F: FnMut(&ReplacedFile),
{
    let mut replaced = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.map_err(|source| UpdateError::Walk {
            root: source_dir.to_path_buf(),
            source,
        })?;
        // Symlinked scripts are copied by content; symlinked directories are not entered.
        if !entry.path().is_file() || ScriptKind::from_path(entry.path()).is_none() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        let destination = install_dir.join(&relative);
        if let Some(parent) = destination.parent() {
            ensure_dir(parent)?;
        }

        copy_preserving(entry.path(), &destination)?;

        let file = ReplacedFile {
            relative,
            destination,
        };
        on_replaced(&file);
        replaced.push(file);
    }

    tracing::info!(count = replaced.len(), "overlay complete");
    Ok(replaced)
}
