use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use defc::{format_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "defc")]
#[command(about = "Builds the syntax tree of a source file and tears it down again")]
struct Args {
    /// Path to the source file to parse
    file: PathBuf,

    /// Print the tree as an S-expression once it is built
    #[arg(long)]
    dump: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8, json: bool) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().with_current_span(false).init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.json);

    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            error!(file = %args.file.display(), %err, "failed to read source file");
            eprintln!("Error: could not read {}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", format_error(&err, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };
    info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let mut state = match parse(tokens, file_name.clone().into()) {
        Ok(state) => state,
        Err(err) => {
            eprint!("{}", format_error(&err, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };
    info!(elapsed = ?parse_start.elapsed(), "parsed");

    if args.dump {
        match state.expect_root() {
            Ok(root) => println!("{}", root),
            Err(err) => {
                eprint!("{}", format_error(&err, &source, &file_name));
                return ExitCode::FAILURE;
            }
        }
    }

    state.teardown();
    info!(total = ?start.elapsed(), "done");

    ExitCode::SUCCESS
}
