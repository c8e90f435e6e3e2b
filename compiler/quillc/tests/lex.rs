//! End-to-end tests for the `lex` command entry points.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use quill_lexer::{LexErrorKind, Mode};
use quillc::commands::{lex_source, read_file, render_lex_error, CommandError};
use quillc::options::{parse_lex_args, LexOptions, OutputFormat};

fn options(format: OutputFormat) -> LexOptions {
    LexOptions {
        format,
        ..LexOptions::default()
    }
}

#[test]
fn plain_output_lists_tokens() {
    let out = lex_source("hi #raw# 7", &options(OutputFormat::Plain)).unwrap();
    assert_eq!(
        out,
        "word \"hi\"\nsymbol '#'\nword \"raw\"\nsymbol '#'\nword \"7\"\neof\n"
    );
}

#[test]
fn plain_output_with_spans() {
    let opts = LexOptions {
        spans: true,
        ..LexOptions::default()
    };
    let out = lex_source("ab 12", &opts).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("word \"ab\""));
    assert!(lines[0].ends_with("0..2"));
    assert!(lines[1].ends_with("3..5"));
    assert!(lines[2].ends_with("5..5"));
}

#[test]
fn debug_output_uses_token_debug() {
    let out = lex_source("+", &options(OutputFormat::Debug)).unwrap();
    assert_eq!(out, "Symbol('+') @ 0..1\nEof @ 1..1\n");
}

#[test]
fn json_output_is_flat_records() {
    let out = lex_source("a 5 #", &options(OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "kind": "word", "value": "a", "start": 0, "end": 1 },
            { "kind": "number", "value": 5, "start": 2, "end": 3 },
            { "kind": "symbol", "value": "#", "start": 4, "end": 5 },
            { "kind": "eof", "start": 5, "end": 5 },
        ])
    );
}

#[test]
fn extended_mode_option_applies() {
    let opts = LexOptions {
        mode: Some(Mode::Extended),
        ..LexOptions::default()
    };
    let out = lex_source("a+b c", &opts).unwrap();
    assert_eq!(out, "word \"a+b\"\nword \"c\"\neof\n");
}

#[test]
fn empty_mode_flag_is_rejected_by_tokenizer() {
    let invocation = parse_lex_args(&["--expr=abc".to_string(), "--mode=".to_string()]).unwrap();
    let err = lex_source("abc", &invocation.options).unwrap_err();
    let err = match err {
        CommandError::Lex(err) => err,
        other => panic!("expected a lex error, got {other:?}"),
    };
    assert_eq!(err.kind, LexErrorKind::MissingMode);
}

#[test]
fn lex_errors_propagate() {
    let err = lex_source("ok a\\bc", &LexOptions::default()).unwrap_err();
    let err = match err {
        CommandError::Lex(err) => err,
        other => panic!("expected a lex error, got {other:?}"),
    };
    assert!(err.is_invalid_escape());
}

#[test]
fn diagnostic_names_code_and_help() {
    let source = "total 3.5";
    let err = lex_source(source, &LexOptions::default()).unwrap_err();
    let err = match err {
        CommandError::Lex(err) => err,
        other => panic!("expected a lex error, got {other:?}"),
    };
    let rendered = render_lex_error("page.quill", source, &err, false);
    assert!(rendered.contains("L0003"), "{rendered}");
    assert!(rendered.contains("does not fit in a 64-bit signed integer"), "{rendered}");
    assert!(rendered.contains("page.quill"), "{rendered}");
    assert!(rendered.contains("decimal points are not supported"), "{rendered}");
}

#[test]
fn missing_file_has_friendly_message() {
    let err = read_file(std::path::Path::new("definitely/not/here.quill")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot find file 'definitely/not/here.quill'"
    );
}
