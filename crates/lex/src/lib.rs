// std imports
use std::io::Read;

// public modules
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

// public uses
pub use error::{Error, Result};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

// ---

/// Begins lexing `reader`, returning a lazy token sequence.
///
/// The sequence ends with exactly one [`TokenKind::EndOfInput`] token, or with
/// a single error item, and is exhausted afterwards.
/// The `name` identifies the source in log records and error messages.
pub fn tokenize<R: Read>(name: impl Into<String>, reader: R) -> Lexer<R> {
    Lexer::new(name, reader)
}
