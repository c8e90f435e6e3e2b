//! Tokenizer error types.
//!
//! Errors follow a WHERE+WHAT+WHY shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` recording what the tokenizer was scanning
//!
//! Every error is fatal to the tokenizer that produced it. The cursor is left
//! wherever the failure was detected, so callers must not resume.

use crate::Span;

/// A tokenizer error with context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
}

/// What kind of tokenizer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Another token was requested after `Eof` was produced.
    #[error("no tokens remain: end of input was already produced")]
    ExhaustedInput,
    /// A backslash with nothing after it, or escaping a letter.
    #[error("invalid escape: {0}")]
    InvalidEscape(EscapeProblem),
    /// A digit run that does not parse as an `i64`.
    #[error("number `{text}` does not fit in a 64-bit signed integer")]
    NumberOverflow { text: String },
    /// A mode override was requested without a mode.
    #[error("mode override requested without a mode")]
    MissingMode,
}

/// Why an escape sequence was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EscapeProblem {
    /// Backslash is the last character of the input.
    #[error("dangling escape at end of input")]
    Dangling,
    /// Letters cannot be escaped.
    #[error("letter `{0}` cannot be escaped")]
    Letter(char),
}

/// Tokenizer context at the point of error.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Between tokens.
    #[default]
    TopLevel,
    /// Inside a word that started at `start`.
    Word { start: u32 },
    /// Inside a number that started at `start`.
    Number { start: u32 },
    /// Handling an explicit mode override.
    ModeOverride,
}

impl LexError {
    fn new(span: Span, kind: LexErrorKind, context: LexErrorContext) -> Self {
        LexError {
            span,
            kind,
            context,
        }
    }

    /// `next_token` called again after `Eof`.
    pub fn exhausted_input(span: Span) -> Self {
        Self::new(span, LexErrorKind::ExhaustedInput, LexErrorContext::TopLevel)
    }

    /// Backslash at the end of input. `span` covers the backslash.
    pub fn dangling_escape(span: Span, context: LexErrorContext) -> Self {
        Self::new(
            span,
            LexErrorKind::InvalidEscape(EscapeProblem::Dangling),
            context,
        )
    }

    /// Backslash followed by a letter. `span` covers both characters.
    pub fn escaped_letter(span: Span, letter: char, word_start: u32) -> Self {
        Self::new(
            span,
            LexErrorKind::InvalidEscape(EscapeProblem::Letter(letter)),
            LexErrorContext::Word { start: word_start },
        )
    }

    /// Digit run that failed integer parsing.
    pub fn number_overflow(span: Span, text: impl Into<String>) -> Self {
        Self::new(
            span,
            LexErrorKind::NumberOverflow { text: text.into() },
            LexErrorContext::Number { start: span.start },
        )
    }

    /// Mode override without a mode. `at` is the cursor position.
    pub fn missing_mode(at: u32) -> Self {
        Self::new(
            Span::point(at),
            LexErrorKind::MissingMode,
            LexErrorContext::ModeOverride,
        )
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self.kind {
            LexErrorKind::ExhaustedInput => "L0001",
            LexErrorKind::InvalidEscape(_) => "L0002",
            LexErrorKind::NumberOverflow { .. } => "L0003",
            LexErrorKind::MissingMode => "L0004",
        }
    }

    /// A one-line suggestion for fixing the input, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::ExhaustedInput => None,
            LexErrorKind::InvalidEscape(EscapeProblem::Dangling) => {
                Some("remove the trailing `\\` or follow it with the character to escape")
            }
            LexErrorKind::InvalidEscape(EscapeProblem::Letter(_)) => {
                Some("letters are taken literally; drop the `\\`")
            }
            LexErrorKind::NumberOverflow { .. } => Some(
                "numbers are whole 64-bit integers; decimal points are not supported",
            ),
            LexErrorKind::MissingMode => Some("pass `basic` or `extended`"),
        }
    }

    /// Whether this is any kind of escape error.
    pub fn is_invalid_escape(&self) -> bool {
        matches!(self.kind, LexErrorKind::InvalidEscape(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn escaped_letter_records_word_context() {
        let err = LexError::escaped_letter(Span::new(1, 3), 'b', 0);
        assert_eq!(
            err.kind,
            LexErrorKind::InvalidEscape(EscapeProblem::Letter('b'))
        );
        assert_eq!(err.context, LexErrorContext::Word { start: 0 });
        assert!(err.is_invalid_escape());
        assert_eq!(err.code(), "L0002");
    }

    #[test]
    fn number_overflow_context_starts_at_span() {
        let err = LexError::number_overflow(Span::new(4, 9), "1.5");
        assert_eq!(err.context, LexErrorContext::Number { start: 4 });
        assert_eq!(
            err.to_string(),
            "number `1.5` does not fit in a 64-bit signed integer"
        );
    }

    #[test]
    fn messages_come_from_kind() {
        let err = LexError::dangling_escape(Span::new(3, 4), LexErrorContext::TopLevel);
        assert_eq!(err.to_string(), "invalid escape: dangling escape at end of input");
        assert_eq!(
            LexError::exhausted_input(Span::point(0)).to_string(),
            "no tokens remain: end of input was already produced"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            LexError::exhausted_input(Span::point(0)).code(),
            LexError::dangling_escape(Span::point(0), LexErrorContext::TopLevel).code(),
            LexError::number_overflow(Span::point(0), "9").code(),
            LexError::missing_mode(0).code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn only_exhaustion_lacks_hint() {
        assert!(LexError::exhausted_input(Span::point(0)).hint().is_none());
        assert!(LexError::missing_mode(2).hint().is_some());
    }
}
