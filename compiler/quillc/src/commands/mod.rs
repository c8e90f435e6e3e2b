//! Command handlers for the Quill CLI.
//!
//! Shared utilities like `read_file` and the command error type live here in
//! the module root.

use quill_lexer::LexError;

mod lex;

pub use lex::{lex_source, render_lex_error, render_tokens, run_lex};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The input did not tokenize.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The input file could not be read.
    #[error("{0}")]
    Read(String),
    /// Token output could not be encoded.
    #[error("failed to encode tokens as JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

/// Read a source file, mapping I/O failures to user-facing messages.
pub fn read_file(path: &std::path::Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.display();
        let msg = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied reading '{path}'")
            }
            std::io::ErrorKind::InvalidData => {
                format!("'{path}' contains invalid UTF-8 data")
            }
            _ => format!("error reading '{path}': {e}"),
        };
        CommandError::Read(msg)
    })
}
