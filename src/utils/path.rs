//! Path utilities

use std::path::{Path, PathBuf};

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" || s.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(s[1..].trim_start_matches('/'));
        }
    }
    path.to_path_buf()
}
