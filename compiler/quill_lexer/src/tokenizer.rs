//! The dual-mode tokenizer.
//!
//! A pull-based state machine over a borrowed input. Each call to
//! [`Tokenizer::next_token`] skips whitespace, then dispatches on the current
//! [`Mode`] and character:
//!
//! - **Extended** (and not at `#`): a raw run up to the next space or `#`
//!   becomes a `Word`. No escapes. A run that stops right before `#` flips the
//!   mode back to `Basic` in the same call, leaving the `#` for the next one.
//! - **Basic** (or `#` in either mode): letters and `\`-escapes form a `Word`,
//!   digits and `.` form a `Number`, anything else is a one-character
//!   `Symbol`. Emitting `#` flips the mode.
//!
//! Once `Eof` has been produced, further requests fail with
//! [`LexErrorKind::ExhaustedInput`](crate::LexErrorKind::ExhaustedInput).

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{LexError, LexErrorContext, Mode, Span, Token, TokenKind, MODE_SWITCH};

const ESCAPE: char = '\\';

/// Byte form of [`MODE_SWITCH`] for `memchr` searches.
const MODE_SWITCH_BYTE: u8 = b'#';

/// Terminates an Extended-mode run (along with `#`).
const RUN_TERMINATOR: u8 = b' ';

/// Pull-based tokenizer for one input string.
///
/// Not reusable across inputs. After any error the tokenizer must be
/// discarded; its cursor is left wherever the failure was detected.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    /// Byte index of the next unconsumed character.
    pos: usize,
    mode: Mode,
    current: Option<Token>,
    /// Set once the iterator has yielded `Eof` or an error.
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `source`, in [`Mode::Basic`].
    pub fn new(source: &'a str) -> Self {
        Self::with_mode(source, Mode::Basic)
    }

    /// Create a tokenizer that starts in `mode`.
    pub fn with_mode(source: &'a str, mode: Mode) -> Self {
        Tokenizer {
            source,
            pos: 0,
            mode,
            current: None,
            done: false,
        }
    }

    /// The full input.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has reached the end of input.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The most recently produced token, or `None` before the first call.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Override the mode, e.g. when outer grammar context calls for `Extended`.
    ///
    /// An absent mode is rejected and leaves the tokenizer unchanged.
    pub fn set_mode(&mut self, mode: Option<Mode>) -> Result<(), LexError> {
        let Some(mode) = mode else {
            return Err(LexError::missing_mode(self.offset()));
        };
        self.switch_mode(mode, "override");
        Ok(())
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.current.as_ref().is_some_and(Token::is_eof) {
            return Err(LexError::exhausted_input(Span::point(self.offset())));
        }

        self.skip_whitespace();

        let token = match self.peek() {
            None => Token::new(TokenKind::Eof, Span::point(self.offset())),
            Some(c) if self.mode == Mode::Extended && c != MODE_SWITCH => self.extended_run(),
            Some(c) => self.basic(c)?,
        };

        trace!(kind = ?token.kind, span = %token.span, mode = %self.mode, "token");
        self.current = Some(token.clone());
        Ok(token)
    }

    fn basic(&mut self, c: char) -> Result<Token, LexError> {
        if c == ESCAPE && self.pos + ESCAPE.len_utf8() == self.source.len() {
            return Err(LexError::dangling_escape(
                Span::from_range(self.pos..self.source.len()),
                LexErrorContext::TopLevel,
            ));
        }

        if is_letter(c) || c == ESCAPE {
            self.word()
        } else if c.is_ascii_digit() {
            self.number()
        } else {
            Ok(self.symbol(c))
        }
    }

    /// Letters and escaped non-letters, up to the first other character.
    fn word(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let mut text = String::new();

        while let Some(c) = self.peek() {
            if c == ESCAPE {
                let escape_start = self.pos;
                self.bump(c);
                let Some(escaped) = self.peek() else {
                    return Err(LexError::dangling_escape(
                        self.span_from(escape_start),
                        LexErrorContext::Word {
                            start: to_offset(start),
                        },
                    ));
                };
                if is_letter(escaped) {
                    self.bump(escaped);
                    return Err(LexError::escaped_letter(
                        self.span_from(escape_start),
                        escaped,
                        to_offset(start),
                    ));
                }
                text.push(escaped);
                self.bump(escaped);
            } else if is_letter(c) {
                text.push(c);
                self.bump(c);
            } else {
                break;
            }
        }

        Ok(Token::new(TokenKind::Word(text), self.span_from(start)))
    }

    /// Digits and `.`, parsed as `i64` once the run ends.
    ///
    /// A `.` is accepted by the scan but always fails the parse.
    fn number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let len = self.source.as_bytes()[start..]
            .iter()
            .take_while(|&&b| b.is_ascii_digit() || b == b'.')
            .count();
        self.pos += len;

        let text = &self.source[start..self.pos];
        let span = self.span_from(start);
        let value = text
            .parse::<i64>()
            .map_err(|_| LexError::number_overflow(span, text))?;
        Ok(Token::new(TokenKind::Number(value), span))
    }

    fn symbol(&mut self, c: char) -> Token {
        let start = self.pos;
        self.bump(c);
        if c == MODE_SWITCH {
            self.switch_mode(self.mode.flipped(), "mode switch symbol");
        }
        Token::new(TokenKind::Symbol(c), self.span_from(start))
    }

    /// Raw run up to the next space or `#`.
    fn extended_run(&mut self) -> Token {
        let start = self.pos;
        let rest = &self.source.as_bytes()[start..];
        let len = memchr::memchr2(RUN_TERMINATOR, MODE_SWITCH_BYTE, rest).unwrap_or(rest.len());
        self.pos += len;

        // Both terminators are ASCII, so `pos` stays on a char boundary.
        let text = &self.source[start..self.pos];
        if self.source.as_bytes().get(self.pos) == Some(&MODE_SWITCH_BYTE) {
            self.switch_mode(Mode::Basic, "run reached mode switch");
        }
        Token::new(TokenKind::Word(text.to_string()), self.span_from(start))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn switch_mode(&mut self, to: Mode, cause: &'static str) {
        if self.mode != to {
            debug!(from = %self.mode, to = %to, at = self.pos, cause, "mode change");
        }
        self.mode = to;
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    #[inline]
    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    #[inline]
    fn offset(&self) -> u32 {
        to_offset(self.pos)
    }

    #[inline]
    fn span_from(&self, start: usize) -> Span {
        Span::from_range(start..self.pos)
    }
}

/// Alphabetic but not numeric, so letter-numbers like `Ⅻ` are not letters.
#[inline]
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Clamp a byte index to a span offset.
#[inline]
fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token through `Eof`, or up to the first error, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = result.as_ref().map_or(true, Token::is_eof);
        Some(result)
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenize all of `source`, starting in `mode`.
///
/// The returned tokens end with `Eof`.
pub fn tokenize(source: &str, mode: Mode) -> Result<Vec<Token>, LexError> {
    Tokenizer::with_mode(source, mode).collect()
}
