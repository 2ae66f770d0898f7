// std imports
use std::{io::Read, iter::FusedIterator, mem::take};

// local imports
use crate::{
    error::{Error, Result},
    source::{ReadError, Source},
    token::{Token, TokenKind},
};

// ---

const INFNAN_SUFFIXES: [&str; 2] = ["inf.0", "nan.0"];
const INFNAN_LEN: usize = 6; // "+inf.0"

// ---

/// Lexer is a finite-state tokenizer over a character stream.
///
/// It is a lazy token sequence: each call to [`Iterator::next`] advances the
/// underlying reader only as far as needed to recognize one token. The sequence
/// ends either with a single [`TokenKind::EndOfInput`] token or with a single
/// error, after which the lexer yields nothing.
pub struct Lexer<R> {
    name: String,
    source: Source<R>,
    state: Option<State>,
    lexeme: String,
    queued: Option<Token>,
}

impl<R: Read> Lexer<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            source: Source::new(reader),
            state: Some(State::Dispatch),
            lexeme: String::new(),
            queued: None,
        }
    }

    /// Returns name of the source being tokenized.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, state: State) -> Result<Step> {
        match state {
            State::Dispatch => self.lex_dispatch(),
            State::SignedNumberOrIdentifier => self.lex_signed(),
            State::UnsignedInteger => self.lex_unsigned_integer(),
            State::Fraction => self.lex_fraction(),
            State::Exponent => self.lex_exponent(),
            State::InfNan => self.lex_infnan(),
            State::Identifier => self.lex_identifier(),
        }
    }

    fn lex_dispatch(&mut self) -> Result<Step> {
        let Some(c) = self.next_char()? else {
            return Ok(self.emit(TokenKind::EndOfInput, None));
        };

        match c {
            c if c.is_whitespace() => {
                self.lexeme.clear();
                Ok(Step::Next(State::Dispatch))
            }
            '0'..='9' | '+' | '-' => {
                self.source.backup();
                Ok(Step::Next(State::SignedNumberOrIdentifier))
            }
            '(' => {
                self.lexeme.push(c);
                Ok(self.emit(TokenKind::LeftParen, Some(State::Dispatch)))
            }
            ')' => {
                self.lexeme.push(c);
                Ok(self.emit(TokenKind::RightParen, Some(State::Dispatch)))
            }
            '.' => {
                self.lexeme.push(c);
                if self.peek_char()?.is_some_and(|c| c.is_ascii_digit()) {
                    Ok(Step::Next(State::Fraction))
                } else {
                    Ok(Step::Next(State::Identifier))
                }
            }
            _ => {
                self.source.backup();
                Ok(Step::Next(State::Identifier))
            }
        }
    }

    fn lex_signed(&mut self) -> Result<Step> {
        match self.next_char()? {
            Some(sign @ ('+' | '-')) => {
                self.lexeme.push(sign);
                match self.peek_char()? {
                    Some(c) if c.is_ascii_digit() => Ok(Step::Next(State::UnsignedInteger)),
                    Some('.') => {
                        self.next_char()?;
                        self.lexeme.push('.');
                        match self.peek_char()? {
                            Some(c) if c.is_ascii_digit() => Ok(Step::Next(State::Fraction)),
                            _ => Err(self.invalid_number()),
                        }
                    }
                    // A sign on its own is an identifier, e.g. `+` in `(+ 1 2)`.
                    None => Ok(self.emit(TokenKind::Identifier, Some(State::Dispatch))),
                    Some(c) if is_delimiter(c) => Ok(self.emit(TokenKind::Identifier, Some(State::Dispatch))),
                    Some(_) => Ok(Step::Next(State::InfNan)),
                }
            }
            Some(c) if c.is_ascii_digit() => {
                self.source.backup();
                Ok(Step::Next(State::UnsignedInteger))
            }
            _ => {
                self.source.backup();
                Ok(Step::Next(State::Identifier))
            }
        }
    }

    fn lex_unsigned_integer(&mut self) -> Result<Step> {
        loop {
            match self.next_char()? {
                Some(c) if c.is_ascii_digit() => self.lexeme.push(c),
                Some('.') => {
                    self.lexeme.push('.');
                    return Ok(Step::Next(State::Fraction));
                }
                Some(c @ ('e' | 'E')) => {
                    self.lexeme.push(c);
                    return Ok(Step::Next(State::Exponent));
                }
                Some(_) => {
                    self.source.backup();
                    return Ok(self.emit(TokenKind::Number, Some(State::Dispatch)));
                }
                None => return Ok(self.emit(TokenKind::Number, Some(State::Dispatch))),
            }
        }
    }

    // Decimal point is already in the lexeme.
    fn lex_fraction(&mut self) -> Result<Step> {
        loop {
            match self.next_char()? {
                Some(c) if c.is_ascii_digit() => self.lexeme.push(c),
                Some(c @ ('e' | 'E')) => {
                    self.lexeme.push(c);
                    return Ok(Step::Next(State::Exponent));
                }
                Some(_) => {
                    self.source.backup();
                    return Ok(self.emit(TokenKind::Number, Some(State::Dispatch)));
                }
                None => return Ok(self.emit(TokenKind::Number, Some(State::Dispatch))),
            }
        }
    }

    // Exponent marker is already in the lexeme.
    fn lex_exponent(&mut self) -> Result<Step> {
        let mut c = self.next_char()?;
        if let Some(sign @ ('+' | '-')) = c {
            self.lexeme.push(sign);
            c = self.next_char()?;
        }

        let mut digits = 0;
        loop {
            match c {
                Some(d) if d.is_ascii_digit() => {
                    self.lexeme.push(d);
                    digits += 1;
                }
                _ if digits == 0 => return Err(self.invalid_number()),
                Some(_) => {
                    self.source.backup();
                    return Ok(self.emit(TokenKind::Number, Some(State::Dispatch)));
                }
                None => return Ok(self.emit(TokenKind::Number, Some(State::Dispatch))),
            }
            c = self.next_char()?;
        }
    }

    // Sign is already in the lexeme.
    fn lex_infnan(&mut self) -> Result<Step> {
        while self.lexeme.chars().count() < INFNAN_LEN {
            match self.next_char()? {
                Some(c) if is_delimiter(c) => {
                    self.source.backup();
                    break;
                }
                Some(c) => self.lexeme.push(c),
                None => break,
            }
        }

        let suffix = &self.lexeme[1..];
        if !INFNAN_SUFFIXES.contains(&suffix) {
            return Err(self.invalid_number());
        }

        match self.peek_char()? {
            Some(c) if !is_delimiter(c) => {
                self.next_char()?;
                self.lexeme.push(c);
                Err(self.invalid_number())
            }
            _ => Ok(self.emit(TokenKind::Number, Some(State::Dispatch))),
        }
    }

    fn lex_identifier(&mut self) -> Result<Step> {
        loop {
            match self.next_char()? {
                Some(c) if is_delimiter(c) => {
                    self.source.backup();
                    return Ok(self.emit(TokenKind::Identifier, Some(State::Dispatch)));
                }
                Some(c) => self.lexeme.push(c),
                None if self.lexeme.is_empty() => return Ok(self.emit(TokenKind::EndOfInput, None)),
                None => {
                    self.queued = Some(Token::end());
                    return Ok(self.emit(TokenKind::Identifier, None));
                }
            }
        }
    }

    #[inline]
    fn emit(&mut self, kind: TokenKind, next: Option<State>) -> Step {
        Step::Emit(Token::new(kind, take(&mut self.lexeme)), next)
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        self.source.next().map_err(|e| self.read_error(e))
    }

    fn peek_char(&mut self) -> Result<Option<char>> {
        self.source.peek().map_err(|e| self.read_error(e))
    }

    fn read_error(&self, e: ReadError) -> Error {
        match e {
            ReadError::Io(source) => Error::Io {
                name: self.name.clone(),
                source,
            },
            ReadError::InvalidUtf8 => Error::InvalidUtf8 { name: self.name.clone() },
        }
    }

    fn invalid_number(&mut self) -> Error {
        Error::InvalidNumber {
            name: self.name.clone(),
            text: take(&mut self.lexeme),
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.queued.take() {
            log::trace!("{}: {}", self.name, token);
            return Some(Ok(token));
        }

        let mut state = self.state.take()?;
        loop {
            match self.step(state) {
                Ok(Step::Next(next)) => state = next,
                Ok(Step::Emit(token, next)) => {
                    self.state = next;
                    log::trace!("{}: {}", self.name, token);
                    return Some(Ok(token));
                }
                Err(e) => {
                    log::debug!("{}: lexer stopped: {}", self.name, e);
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for Lexer<R> {}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Dispatch,
    SignedNumberOrIdentifier,
    UnsignedInteger,
    Fraction,
    Exponent,
    InfNan,
    Identifier,
}

enum Step {
    Next(State),
    Emit(Token, Option<State>),
}

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}
