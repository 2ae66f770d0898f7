// std imports
use std::io::Read;

// third-party imports
use slicep_lex::tokenize;

// local imports
use crate::{
    ast::Node,
    error::{Error, Result},
    stream::{EOF, IDENT, LPAREN, Lex, RPAREN, TokenStream, UINTEGER10, Value},
};

// ---

const DEFAULT_SOURCE_NAME: &str = "input";

// ---

/// Parses exactly one expression from `reader`.
pub fn parse<R: Read>(reader: R) -> Result<Node> {
    parse_named(DEFAULT_SOURCE_NAME, reader)
}

/// Parses exactly one expression from `reader`, naming the source `name` in diagnostics.
pub fn parse_named<R: Read>(name: impl Into<String>, reader: R) -> Result<Node> {
    let name = name.into();
    log::debug!("parsing {}", name);

    let mut parser = Parser::new(TokenStream::new(tokenize(name, reader)));
    let status = parser.run();
    let (result, mut stream) = parser.into_parts();

    if let Some(error) = stream.take_error() {
        return Err(error);
    }

    match (status, result) {
        (Status::Accept, Some(node)) => Ok(node),
        _ => Err(Error::Syntax {
            near: stream.last().map(|token| token.text.clone()).unwrap_or_default(),
            message: "parsing aborted".into(),
        }),
    }
}

/// Parses exactly one expression from a string.
pub fn parse_str(input: &str) -> Result<Node> {
    parse(input.as_bytes())
}

// ---

/// Status is the outcome of a grammar engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Accept,
    Abort,
}

// ---

/// Parser is a shift/reduce engine for the expression grammar
///
/// ```text
/// expression := Number | Identifier | '(' expression+ ')'
/// ```
///
/// driven by integer token codes pulled through [`Lex`].
/// Open lists are kept on an explicit stack so nesting depth is not limited
/// by the call stack. A run accepts exactly one top-level expression followed by
/// end of input and deposits it into the result slot. Any other token sequence
/// aborts the run after reporting the problem via [`Lex::error`].
pub struct Parser<L> {
    lexer: L,
    frames: Vec<Frame>,
    result: Option<Node>,
}

impl<L: Lex> Parser<L> {
    pub fn new(lexer: L) -> Self {
        Self {
            lexer,
            frames: Vec::new(),
            result: None,
        }
    }

    pub fn run(&mut self) -> Status {
        let mut value = Value::None;

        loop {
            let code = self.lexer.lex(&mut value);

            if code != EOF && self.frames.is_empty() && self.result.is_some() {
                return self.abort("unexpected token after expression");
            }

            let node = match code {
                LPAREN => {
                    self.frames.push(Frame::default());
                    continue;
                }
                RPAREN => match self.frames.pop() {
                    Some(frame) => match frame.reduce() {
                        Some(node) => node,
                        None => return self.abort("empty procedure call"),
                    },
                    None => return self.abort("unexpected ')'"),
                },
                IDENT => match value.take() {
                    Value::Ident(name) => Node::identifier(name),
                    _ => return self.abort("missing identifier value"),
                },
                UINTEGER10 => match value.take() {
                    Value::UInteger(n) => Node::number(n),
                    _ => return self.abort("missing number value"),
                },
                EOF => {
                    if !self.frames.is_empty() {
                        return self.abort("unexpected end of input, expected ')'");
                    }
                    if self.result.is_none() {
                        return self.abort("unexpected end of input, expected expression");
                    }
                    log::debug!("accepted");
                    return Status::Accept;
                }
                code => return self.abort(&format!("unexpected token code {}", code)),
            };

            self.shift(node);
        }
    }

    #[inline]
    pub fn into_parts(self) -> (Option<Node>, L) {
        (self.result, self.lexer)
    }

    fn shift(&mut self, node: Node) {
        log::trace!("reduced {}", node);
        match self.frames.last_mut() {
            Some(frame) => frame.push(node),
            None => self.result = Some(node),
        }
    }

    fn abort(&mut self, message: &str) -> Status {
        log::debug!("aborted: {}", message);
        self.lexer.error(message);
        self.frames.clear();
        self.result = None;
        Status::Abort
    }
}

// ---

#[derive(Default)]
struct Frame {
    operator: Option<Node>,
    operands: Vec<Node>,
}

impl Frame {
    fn push(&mut self, node: Node) {
        if self.operator.is_none() {
            self.operator = Some(node);
        } else {
            self.operands.push(node);
        }
    }

    fn reduce(self) -> Option<Node> {
        let operands = self.operands;
        self.operator.map(|operator| Node::call(operator, operands))
    }
}

#[cfg(test)]
mod tests;
