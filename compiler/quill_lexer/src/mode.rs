//! Tokenizer modes.

use std::fmt;
use std::str::FromStr;

/// The reserved character that switches between modes.
pub const MODE_SWITCH: char = '#';

/// Interpretation context of the tokenizer.
///
/// `Basic` applies the letter/digit/symbol rules with escapes. `Extended`
/// reads raw runs up to the next space or [`MODE_SWITCH`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    #[default]
    Basic,
    Extended,
}

impl Mode {
    /// The other mode.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Mode {
        match self {
            Mode::Basic => Mode::Extended,
            Mode::Extended => Mode::Basic,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Extended => "extended",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized mode name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown mode `{0}` (expected `basic` or `extended`)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("basic") {
            Ok(Mode::Basic)
        } else if s.eq_ignore_ascii_case("extended") {
            Ok(Mode::Extended)
        } else {
            Err(UnknownMode(s.to_string()))
        }
    }
}
