use thiserror::Error;

/// Classifies catalog loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    /// File open/read failure
    FileError,
    /// Data format or decoding error (bad JSON, non-string element, etc.)
    InvalidData,
}

/// Domain finder error types
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Catalog error: {message}")]
    CatalogError {
        kind: CatalogErrorKind,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FinderError {
    pub(crate) fn catalog(kind: CatalogErrorKind, message: impl Into<String>) -> Self {
        Self::CatalogError {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
