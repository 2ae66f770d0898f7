// std imports
use std::io;

// third-party imports
use thiserror::Error;

/// Error is an error which may stop the lexer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid utf-8 sequence in {name}")]
    InvalidUtf8 { name: String },
    #[error("invalid number token {text:?} in {name}")]
    InvalidNumber { name: String, text: String },
}

impl Error {
    /// Returns name of the source the error occurred in.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Io { name, .. } | Self::InvalidUtf8 { name } | Self::InvalidNumber { name, .. } => name,
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
