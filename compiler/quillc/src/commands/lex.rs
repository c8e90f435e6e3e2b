//! The `lex` command: tokenize input and display the token stream.

use std::fmt::Write as _;
use std::io::IsTerminal;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use quill_lexer::{LexError, LexErrorContext, Token, Tokenizer};
use tracing::debug;

use super::{read_file, CommandError};
use crate::options::{parse_lex_args, LexInput, LexOptions, OutputFormat};

/// Run `quill lex` with the arguments after the subcommand.
///
/// Prints tokens to stdout and diagnostics to stderr. Returns the process
/// exit code.
pub fn run_lex(args: &[String]) -> i32 {
    let invocation = match parse_lex_args(args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: quill lex <file.quill> [options]");
            eprintln!("       quill lex --expr=<text> [options]");
            return 1;
        }
    };

    let name = invocation.input.display_name();
    let source = match &invocation.input {
        LexInput::File(path) => match read_file(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        },
        LexInput::Inline(text) => text.clone(),
    };

    match lex_source(&source, &invocation.options) {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(CommandError::Lex(err)) => {
            let color = std::io::stderr().is_terminal();
            eprint!("{}", render_lex_error(&name, &source, &err, color));
            1
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

/// Tokenize `source` and render the stream according to `options`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), mode = ?options.mode))]
pub fn lex_source(source: &str, options: &LexOptions) -> Result<String, CommandError> {
    let mut lexer = Tokenizer::new(source);
    lexer.set_mode(options.mode)?;
    let tokens = lexer.collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), "tokenized");
    render_tokens(&tokens, options)
}

/// Render tokens in the requested output format.
pub fn render_tokens(tokens: &[Token], options: &LexOptions) -> Result<String, CommandError> {
    let mut out = String::new();
    match options.format {
        OutputFormat::Plain => {
            for token in tokens {
                let kind = token.kind.to_string();
                // Writing to a String cannot fail.
                let _ = if options.spans {
                    writeln!(out, "{kind:<24} {}", token.span)
                } else {
                    writeln!(out, "{kind}")
                };
            }
        }
        OutputFormat::Debug => {
            for token in tokens {
                let _ = writeln!(out, "{token:?}");
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// Render a tokenizer error as a source diagnostic.
pub fn render_lex_error(name: &str, source: &str, err: &LexError, color: bool) -> String {
    let mut report = Report::build(ReportKind::Error, name, err.span.start as usize)
        .with_code(err.code())
        .with_message(err.kind.to_string())
        .with_label(
            Label::new((name, err.span.to_range()))
                .with_message(context_label(err.context))
                .with_color(Color::Red),
        )
        .with_config(Config::default().with_color(color));
    if let Some(hint) = err.hint() {
        report = report.with_help(hint);
    }

    let mut buf = Vec::new();
    match report.finish().write((name, Source::from(source)), &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("error[{}]: {err} at {}:{}\n", err.code(), name, err.span),
    }
}

fn context_label(context: LexErrorContext) -> String {
    match context {
        LexErrorContext::TopLevel => "here".to_string(),
        LexErrorContext::Word { start } => format!("in the word starting at offset {start}"),
        LexErrorContext::Number { start } => format!("in the number starting at offset {start}"),
        LexErrorContext::ModeOverride => "while applying the mode override".to_string(),
    }
}
