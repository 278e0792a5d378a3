//! Script file classification

use std::path::Path;

/// Kinds of driver files the updater manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Python,
    Shell,
}

impl ScriptKind {
    /// Classify a file by the suffix of its name
    pub fn from_name(name: &str) -> Option<Self> {
        if name.ends_with(".py") {
            Some(ScriptKind::Python)
        } else if name.ends_with(".sh") {
            Some(ScriptKind::Shell)
        } else {
            None
        }
    }

    /// Classify a path by its final component
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_name)
    }

    /// Unix mode bits the file should carry after installation
    pub fn mode(&self) -> u32 {
        match self {
            ScriptKind::Python => 0o644,
            ScriptKind::Shell => 0o755,
        }
    }
}
