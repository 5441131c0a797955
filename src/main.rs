use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use giblex::{
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, tokenize_with_recovery},
        tokens::Token,
    },
    logger::Logger,
    render_error,
};

#[derive(Parser)]
#[command(name = "giblex")]
#[command(about = "Tokenizes a giblang source file and lists its tokens.")]
#[command(version)]
struct Args {
    /// Source file to tokenize
    file: PathBuf,

    #[arg(long, help = "Omit whitespace and comment tokens from the listing")]
    no_trivia: bool,

    #[arg(long, help = "Keep scanning past errors and report all of them")]
    recover: bool,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    Logger::init(args.debug);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the file tokenized without errors.
fn run(args: &Args) -> anyhow::Result<bool> {
    let source = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args.file.to_string_lossy();

    let start = Instant::now();

    let (tokens, errors) = if args.recover {
        tokenize_with_recovery(&source)
    } else {
        match tokenize(&source) {
            Ok(tokens) => (tokens, vec![]),
            Err(error) => (vec![], vec![error]),
        }
    };

    log::debug!("Tokenized in {:?}", start.elapsed());

    for token in tokens.iter().filter(|token| !(args.no_trivia && token.kind.is_trivia())) {
        println!("{}", describe(token));
    }

    report(&errors, &source, &file_name);
    Ok(errors.is_empty())
}

fn describe(token: &Token) -> String {
    format!(
        "{:>5}..{:<5} {:<12} {:<12} {:?}",
        token.span.start,
        token.span.end,
        token.kind.to_string(),
        token.class(),
        token.value
    )
}

fn report(errors: &[Error], source: &str, file_name: &str) {
    for error in errors {
        eprint!("{}", render_error(error, source, file_name));
    }
}
