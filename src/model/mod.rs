//! Core data models for the updater

mod script;
mod settings;

pub use script::ScriptKind;
pub use settings::{
    BackupSettings, DisplaySettings, InstallSettings, ServiceSettings, Settings, SourceSettings,
};
