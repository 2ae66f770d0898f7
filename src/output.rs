// std imports
use std::io::{Read, Write};

// third-party imports
use slicep_lex::tokenize;

// local imports
use crate::{
    ast::Node,
    error::{Error, Result},
    settings::OutputFormat,
};

// ---

/// Maximum nesting depth of a tree rendered in debug or JSON format.
pub const MAX_STRUCTURED_DEPTH: usize = 1024;

// ---

/// Writes `node` to `out` in the given format followed by a newline.
///
/// S-expression output supports trees of any depth. Debug and JSON output
/// reject trees nested deeper than [`MAX_STRUCTURED_DEPTH`].
pub fn write_node<W: Write>(out: &mut W, node: &Node, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Sexpr => writeln!(out, "{}", node)?,
        OutputFormat::Debug => {
            check_depth(node, "debug")?;
            writeln!(out, "{:#?}", node)?;
        }
        OutputFormat::Json => {
            check_depth(node, "json")?;
            json::to_writer_pretty(&mut *out, node)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Tokenizes `reader` and writes one `kind<TAB>text` line per token.
///
/// Tokens are written as they are recognized, so everything preceding a lexical
/// error is still written before the error is returned.
pub fn write_tokens<R: Read, W: Write>(out: &mut W, name: &str, reader: R) -> Result<()> {
    let tokens = tokenize(name, reader);
    log::debug!("tokenizing {}", tokens.name());

    for token in tokens {
        let token = token?;
        writeln!(out, "{}\t{}", token.kind, token.text)?;
    }
    Ok(())
}

fn check_depth(node: &Node, format: &'static str) -> Result<()> {
    let depth = node.depth();
    if depth > MAX_STRUCTURED_DEPTH {
        return Err(Error::NestingTooDeep {
            depth,
            limit: MAX_STRUCTURED_DEPTH,
            format,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
