//! Updater settings structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub install: InstallSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub backup: BackupSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub service: ServiceSettings,
}

/// Where to look for an existing deployment
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InstallSettings {
    /// Probed in order, first existing path wins
    pub candidates: Vec<PathBuf>,
}

/// Where to look for the new driver files
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourceSettings {
    pub dir_name: String,
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackupSettings {
    pub dir_name: String,
}

/// Value written to `ui.display` in the device configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

/// Service restart configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceSettings {
    /// Full argv of the restart command
    pub command: Vec<String>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        InstallSettings {
            candidates: vec![
                PathBuf::from("/home/pi/pwnagotchi"),
                PathBuf::from("/opt/pwnagotchi"),
                PathBuf::from("/usr/local/lib/python3.7/dist-packages/pwnagotchi"),
            ],
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            dir_name: "gfx_hat".to_string(),
        }
    }
}

impl Default for BackupSettings {
    fn default() -> Self {
        BackupSettings {
            dir_name: "backup_gfx_hat".to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            kind: "gfxhat".to_string(),
            color: "black".to_string(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            command: ["sudo", "systemctl", "restart", "pwnagotchi"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Get the updater settings directory path
    pub fn settings_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("gfxhat-updater")
    }

    /// Get the default settings file path
    pub fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.toml")
    }

    /// Load settings from `path`, or return defaults if the file doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.install.candidates.len(), 3);
        assert_eq!(
            settings.install.candidates[0],
            PathBuf::from("/home/pi/pwnagotchi")
        );
        assert_eq!(settings.source.dir_name, "gfx_hat");
        assert_eq!(settings.backup.dir_name, "backup_gfx_hat");
        assert_eq!(settings.display.kind, "gfxhat");
        assert_eq!(settings.display.color, "black");
        assert_eq!(
            settings.service.command,
            vec!["sudo", "systemctl", "restart", "pwnagotchi"]
        );
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[service]
command = ["true"]

[display]
type = "inky"
color = "red"
"#,
        )
        .unwrap();
        assert_eq!(settings.service.command, vec!["true"]);
        assert_eq!(settings.display.kind, "inky");
        assert_eq!(settings.source.dir_name, "gfx_hat");
        assert_eq!(settings.install.candidates.len(), 3);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings.backup.dir_name, "backup_gfx_hat");
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[service\ncommand = 1").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}
