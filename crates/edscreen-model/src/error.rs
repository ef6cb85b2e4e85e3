use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid column reference '{0}': expected letters A-XFD")]
    InvalidColumn(String),
    #[error("unknown source kind '{0}'")]
    UnknownSourceKind(String),
    #[error("substance identifier is empty after normalization")]
    EmptyIdentifier,
}

pub type Result<T> = std::result::Result<T, ModelError>;
