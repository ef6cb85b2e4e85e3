#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown source '{key}' in config")]
    UnknownSource { key: String },

    #[error("source '{source_key}' is configured more than once")]
    DuplicateSource { source_key: String },

    #[error("source '{source_key}' has no field '{field}'")]
    UnknownField { source_key: String, field: String },

    #[error("invalid column '{value}' for {source_key}/{field}")]
    InvalidColumn {
        source_key: String,
        field: String,
        value: String,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
