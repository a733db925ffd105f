//! Error types for opine.

use thiserror::Error;

/// Result type for opine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for opine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Pipeline configuration rejected before any I/O.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A label token has no entry in the formatter table.
    #[error("Unknown label token: {0:?}")]
    UnknownLabel(String),

    /// A document id has no entry in the provider.
    #[error("Unknown document id: {0:?}")]
    UnknownDocument(String),

    /// An opinion with the same synonym-group pair was already collected.
    #[error("Duplicate opinion for group pair ({0}, {1})")]
    DuplicateOpinion(u32, u32),

    /// An opinion end is absent from a read-only synonym collection.
    #[error("Synonym group missing for value: {0:?}")]
    MissingSynonym(String),

    /// Annotation file parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
