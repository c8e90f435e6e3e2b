//! Quill CLI

use quillc::commands::run_lex;

fn main() {
    quillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quill lex <file.quill> [options]");
                std::process::exit(1);
            }
            std::process::exit(run_lex(&args[2..]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare template path is shorthand for `lex`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("quill"))
            {
                std::process::exit(run_lex(&args[1..]));
            }
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill template tokenizer");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.quill>     Tokenize a file and display tokens");
    println!("  lex --expr=<text>    Tokenize inline text");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --mode=<mode>        Initial mode: basic (default), extended");
    println!("  --format=<format>    Output: plain (default), debug, json");
    println!("  --spans              Show byte spans in plain output");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging (e.g. quill_lexer=trace)");
    println!("  QUILL_LOG_TREE       Use indented tree log output");
    println!();
    println!("Examples:");
    println!("  quill lex page.quill");
    println!("  quill lex --expr='hello #raw text#' --spans");
    println!("  quill lex page.quill --mode=extended --format=json");
}
