//! Token types for the Quill tokenizer.

use crate::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: TokenKind,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Whether this is the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds, each carrying its value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", content = "value", rename_all = "lowercase")
)]
pub enum TokenKind {
    /// Letters and escaped characters (Basic), or a raw run (Extended).
    Word(String),
    /// Digit run parsed as a signed 64-bit integer.
    Number(i64),
    /// Any other single non-whitespace character, including `#`.
    Symbol(char),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// The payload-free tag for this kind.
    #[inline]
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Word(_) => TokenTag::Word,
            TokenKind::Number(_) => TokenTag::Number,
            TokenKind::Symbol(_) => TokenTag::Symbol,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            TokenKind::Word(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            TokenKind::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<char> {
        match self {
            TokenKind::Symbol(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(text) => write!(f, "word {text:?}"),
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Symbol(c) => write!(f, "symbol {c:?}"),
            TokenKind::Eof => f.write_str("eof"),
        }
    }
}

/// Discriminant of a [`TokenKind`] without its payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenTag {
    Word,
    Number,
    Symbol,
    Eof,
}

impl TokenTag {
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Word => "word",
            TokenTag::Number => "number",
            TokenTag::Symbol => "symbol",
            TokenTag::Eof => "eof",
        }
    }
}
