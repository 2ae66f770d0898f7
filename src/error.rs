// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lex(#[from] slicep_lex::Error),
    #[error("syntax error near '{near}': {message}")]
    Syntax { near: String, message: String },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] json::Error),
    #[error("file {filename:?} not found")]
    FileNotFound { filename: String },
    #[error("expression nesting depth {depth} exceeds {limit} supported by {format} output")]
    NestingTooDeep {
        depth: usize,
        limit: usize,
        format: &'static str,
    },
}

impl Error {
    /// Writes the error in human readable form, styling the label if `colored` is set.
    pub fn log_to<W: Write>(&self, target: &mut W, colored: bool) -> io::Result<()> {
        if colored {
            writeln!(target, "{} {}", "error:".bright_red().bold(), self)
        } else {
            writeln!(target, "error: {}", self)
        }
    }

    /// Returns true if the error concerns a single input, so that processing of other inputs may continue.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::Syntax { .. } | Self::FileNotFound { .. } | Self::NestingTooDeep { .. } => true,
            Self::Lex(e) => matches!(e, slicep_lex::Error::InvalidNumber { .. } | slicep_lex::Error::InvalidUtf8 { .. }),
            _ => false,
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
