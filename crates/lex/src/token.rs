// std imports
use std::fmt;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    LeftParen,
    RightParen,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::EndOfInput => "end of input",
        })
    }
}

// ---

/// A classified lexeme.
///
/// `text` is the exact source substring the token was recognized from,
/// so it is empty only for [`TokenKind::EndOfInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[inline]
    pub fn end() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            _ => write!(f, "{} {:?}", self.kind, self.text),
        }
    }
}
