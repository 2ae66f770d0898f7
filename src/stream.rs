// std imports
use std::mem::take;

// third-party imports
use slicep_lex::{Token, TokenKind};

// local imports
use crate::error::Error;

// ---

/// Code is an integer token code understood by the grammar engine.
pub type Code = i32;

/// End of token stream.
pub const EOF: Code = 0;
pub const IDENT: Code = 57346;
pub const UINTEGER10: Code = 57347;
pub const LPAREN: Code = 57348;
pub const RPAREN: Code = 57349;

// ---

/// Semantic value accompanying a token code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    None,
    Ident(String),
    UInteger(u64),
}

impl Value {
    #[inline]
    pub fn take(&mut self) -> Self {
        take(self)
    }
}

// ---

/// Lex is the interface the grammar engine pulls tokens through.
pub trait Lex {
    /// Fetches the next token code, storing its semantic value into `value`.
    fn lex(&mut self, value: &mut Value) -> Code;

    /// Reports a syntax error detected by the engine.
    fn error(&mut self, message: &str);
}

// ---

/// TokenStream adapts a lexer token sequence to the [`Lex`] interface.
///
/// It pulls exactly one token per [`Lex::lex`] call and remembers the last one
/// for diagnostics. The first failure, whether raised by the lexer, by number
/// conversion or by the engine, is recorded and later failures are ignored.
pub struct TokenStream<I> {
    tokens: I,
    last: Option<Token>,
    error: Option<Error>,
}

impl<I> TokenStream<I>
where
    I: Iterator<Item = slicep_lex::Result<Token>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            last: None,
            error: None,
        }
    }

    /// Returns the most recently fetched token other than end of input.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    /// Takes the recorded error, if any.
    #[inline]
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            log::debug!("token stream failed: {}", error);
            self.error = Some(error);
        } else {
            log::trace!("ignoring subsequent failure: {}", error);
        }
    }
}

impl<I> Lex for TokenStream<I>
where
    I: Iterator<Item = slicep_lex::Result<Token>>,
{
    fn lex(&mut self, value: &mut Value) -> Code {
        *value = Value::None;

        let token = match self.tokens.next() {
            Some(Ok(token)) => token,
            Some(Err(e)) => {
                self.fail(e.into());
                return EOF;
            }
            None => return EOF,
        };

        let code = match token.kind {
            TokenKind::Identifier => {
                *value = Value::Ident(token.text.clone());
                IDENT
            }
            TokenKind::Number => match token.text.parse::<u64>() {
                Ok(n) => {
                    *value = Value::UInteger(n);
                    UINTEGER10
                }
                Err(_) => {
                    let message = format!("invalid number: {}", token.text);
                    self.last = Some(token);
                    Lex::error(self, &message);
                    return EOF;
                }
            },
            TokenKind::LeftParen => LPAREN,
            TokenKind::RightParen => RPAREN,
            // Keep the last real lexeme for diagnostics.
            TokenKind::EndOfInput => return EOF,
        };

        self.last = Some(token);
        code
    }

    fn error(&mut self, message: &str) {
        let near = self.last.as_ref().map(|token| token.text.clone()).unwrap_or_default();
        self.fail(Error::Syntax {
            near,
            message: message.into(),
        });
    }
}
