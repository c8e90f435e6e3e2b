//! Dual-mode tokenizer for the Quill template dialect.

mod lex_error;
mod mode;
mod span;
mod token;
mod tokenizer;

pub use lex_error::{EscapeProblem, LexError, LexErrorContext, LexErrorKind};
pub use mode::{Mode, UnknownMode, MODE_SWITCH};
pub use span::Span;
pub use token::{Token, TokenKind, TokenTag};
pub use tokenizer::{tokenize, Tokenizer};
