//! Error types for update operations

use std::path::PathBuf;

/// Errors raised by the individual update steps
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("'ui' in {} is not a table", path.display())]
    UiNotTable { path: PathBuf },

    #[error("restart command is empty")]
    EmptyCommand,

    #[error("failed to read confirmation")]
    Prompt(#[source] dialoguer::Error),

    #[error("failed to read confirmation")]
    PromptInput(#[source] std::io::Error),
}

impl UpdateError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UpdateError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, UpdateError>;
