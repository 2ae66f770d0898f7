// public modules
pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parse;
pub mod settings;
pub mod stream;

// public uses
pub use ast::Node;
pub use error::{Error, Result};
pub use parse::{parse, parse_named, parse_str};
pub use settings::{OutputFormat, Settings};

// re-exports
pub use slicep_lex as lex;
