//! Settings management module

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::Settings;
use crate::utils::path::expand_tilde;

/// Load settings from `path`, or from the default location when `None`
///
/// A missing file yields the defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path
        .map(expand_tilde)
        .unwrap_or_else(Settings::settings_path);

    let settings = Settings::load_from(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}
