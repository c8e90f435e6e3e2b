//! Command-line options for `quill lex`.

use std::path::PathBuf;

use quill_lexer::Mode;

use crate::commands::CommandError;

/// How tokens are printed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One `Display` line per token.
    #[default]
    Plain,
    /// One `Debug` line per token, with spans.
    Debug,
    /// A JSON array of token objects.
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(OutputFormat::Plain),
            "debug" => Some(OutputFormat::Debug),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options controlling a tokenizer run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOptions {
    /// Initial mode. `None` means `--mode=` was given without a value; the
    /// tokenizer rejects it when the override is applied.
    pub mode: Option<Mode>,
    pub format: OutputFormat,
    /// Append spans in plain output.
    pub spans: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            mode: Some(Mode::Basic),
            format: OutputFormat::default(),
            spans: false,
        }
    }
}

/// What to tokenize.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexInput {
    File(PathBuf),
    Inline(String),
}

impl LexInput {
    /// Name used in diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            LexInput::File(path) => path.display().to_string(),
            LexInput::Inline(_) => "<expr>".to_string(),
        }
    }
}

/// A parsed `quill lex` command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexInvocation {
    pub input: LexInput,
    pub options: LexOptions,
}

/// Parse option flags. Unknown values warn and keep the default.
pub fn parse_lex_options(args: &[String]) -> LexOptions {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--mode=") {
            if mode.is_empty() {
                options.mode = None;
            } else {
                match mode.parse::<Mode>() {
                    Ok(mode) => options.mode = Some(mode),
                    Err(e) => eprintln!("warning: {e}, using basic"),
                }
            }
        } else if let Some(format) = arg.strip_prefix("--format=") {
            if let Some(f) = OutputFormat::from_str(format) {
                options.format = f;
            } else {
                eprintln!("warning: unknown format '{format}', options: plain, debug, json");
            }
        } else if arg == "--spans" {
            options.spans = true;
        }
    }

    options
}

/// Parse the arguments following `quill lex`.
pub fn parse_lex_args(args: &[String]) -> Result<LexInvocation, CommandError> {
    let mut input = None;
    let mut flags = Vec::new();

    for arg in args {
        if let Some(expr) = arg.strip_prefix("--expr=") {
            input = Some(LexInput::Inline(expr.to_string()));
        } else if arg.starts_with('-') {
            flags.push(arg.clone());
        } else if input.is_none() {
            input = Some(LexInput::File(PathBuf::from(arg)));
        } else {
            return Err(CommandError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    let Some(input) = input else {
        return Err(CommandError::Usage(
            "missing input: pass a file or --expr=<text>".to_string(),
        ));
    };

    Ok(LexInvocation {
        input,
        options: parse_lex_options(&flags),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults() {
        let options = parse_lex_options(&[]);
        assert_eq!(options, LexOptions::default());
        assert_eq!(options.mode, Some(Mode::Basic));
    }

    #[test]
    fn all_flags() {
        let options = parse_lex_options(&args(&["--mode=extended", "--format=json", "--spans"]));
        assert_eq!(options.mode, Some(Mode::Extended));
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.spans);
    }

    #[test]
    fn empty_mode_is_missing() {
        let options = parse_lex_options(&args(&["--mode="]));
        assert_eq!(options.mode, None);
    }

    #[test]
    fn unknown_values_keep_defaults() {
        let options = parse_lex_options(&args(&["--mode=raw", "--format=xml", "--other"]));
        assert_eq!(options, LexOptions::default());
    }

    #[test]
    fn file_input() {
        let invocation = parse_lex_args(&args(&["page.quill", "--format=debug"])).unwrap();
        assert_eq!(invocation.input, LexInput::File(PathBuf::from("page.quill")));
        assert_eq!(invocation.options.format, OutputFormat::Debug);
    }

    #[test]
    fn inline_input() {
        let invocation = parse_lex_args(&args(&["--expr=a #b"])).unwrap();
        assert_eq!(invocation.input, LexInput::Inline("a #b".to_string()));
        assert_eq!(invocation.input.display_name(), "<expr>");
    }

    #[test]
    fn missing_input_is_usage_error() {
        let err = parse_lex_args(&args(&["--spans"])).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn second_path_is_usage_error() {
        let err = parse_lex_args(&args(&["a.quill", "b.quill"])).unwrap_err();
        assert!(matches!(err, CommandError::Usage(msg) if msg.contains("b.quill")));
    }
}
