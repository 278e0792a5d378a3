//! Backup of the scripts shipped in the install directory

use std::path::{Path, PathBuf};

use crate::error::{Result, UpdateError};
use crate::model::ScriptKind;
use crate::utils::fs::{copy_preserving, ensure_dir};

/// Outcome of a backup run
#[derive(Debug, Clone)]
pub struct BackupReport {
    pub backup_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Backup manager
pub struct BackupManager {
    install_dir: PathBuf,
    backup_dir: PathBuf,
}

impl BackupManager {
    pub fn new(install_dir: &Path, dir_name: &str) -> Self {
        Self {
            install_dir: install_dir.to_path_buf(),
            backup_dir: install_dir.join(dir_name),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Copy every top-level `.py`/`.sh` file of the install directory into the backup directory
    ///
    /// Subdirectories are not descended into; their scripts are never backed up.
    pub fn backup_scripts(&self) -> Result<BackupReport> {
        ensure_dir(&self.backup_dir)?;

        let read_dir = std::fs::read_dir(&self.install_dir)
            .map_err(|e| UpdateError::io("read directory", &self.install_dir, e))?;

        let mut files = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| UpdateError::io("read directory", &self.install_dir, e))?;
            let path = entry.path();
            if ScriptKind::from_path(&path).is_none() || !path.is_file() {
                continue;
            }

            let target = self.backup_dir.join(entry.file_name());
            copy_preserving(&path, &target)?;
            files.push(target);
        }
        files.sort();

        tracing::info!(dir = %self.backup_dir.display(), count = files.len(), "backup complete");
        Ok(BackupReport {
            backup_dir: self.backup_dir.clone(),
            files,
        })
    }
}
