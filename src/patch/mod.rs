//! Selecting the display driver in the device `config.toml`

use std::path::{Path, PathBuf};
use toml::{Table, Value};

use crate::error::{Result, UpdateError};
use crate::model::DisplaySettings;

/// Name of the device configuration file at the install root
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// What happened to the device configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched(PathBuf),
    NotFound(PathBuf),
}

/// Replace `ui.display` in `<install_dir>/config.toml` and write the document back
///
/// A missing file is not an error. A missing `ui` table is created.
pub fn patch_config(install_dir: &Path, display: &DisplaySettings) -> Result<PatchOutcome> {
    let path = install_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "device config not found");
        return Ok(PatchOutcome::NotFound(path));
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| UpdateError::io("read", &path, e))?;
    let mut doc: Table = content
        .parse()
        .map_err(|source| UpdateError::ConfigParse {
            path: path.clone(),
            source,
        })?;

    set_display(&mut doc, display, &path)?;

    let output = toml::to_string(&doc).map_err(|source| UpdateError::ConfigSerialize {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, output).map_err(|e| UpdateError::io("write", &path, e))?;

    let kind = &display.kind;
    tracing::info!(path = %path.display(), display = %kind, "device config patched");
    Ok(PatchOutcome::Patched(path))
}

/// Overwrite `ui.display` in `doc` with exactly the `type`/`color` pair
fn set_display(doc: &mut Table, display: &DisplaySettings, path: &Path) -> Result<()> {
    let ui = doc.entry("ui").or_insert(Value::Table(Table::new()));
    let Value::Table(ui) = ui else {
        return Err(UpdateError::UiNotTable {
            path: path.to_path_buf(),
        });
    };

    let mut table = Table::new();
    table.insert("type".to_string(), Value::String(display.kind.clone()));
    table.insert("color".to_string(), Value::String(display.color.clone()));
    ui.insert("display".to_string(), Value::Table(table));
    Ok(())
}
