// ABOUTME: CLI entry point — reads a source file, parses it, and executes its statements in order

mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod printer;
mod value;

use builtins::register_builtins;
use clap::Parser;
use config::color;
use env::Environment;
use error::LispError;
use std::path::PathBuf;
use std::process::ExitCode;

/// A batch interpreter for a small Lisp-like expression language.
#[derive(Parser, Debug)]
#[command(name = "lisp-batch-interpreter")]
#[command(version = config::VERSION)]
#[command(about = "Parses a source file and executes its top-level statements in order")]
struct CliArgs {
    /// Source file to execute
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Enable ANSI colour in PRINT output and the fatal-error banner
    #[arg(long = "color", short = 'c')]
    color: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    builtins::set_color_enabled(args.color);

    if let Err(err) = run(&args.source) {
        report_fatal(&err, args.color);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(source: &PathBuf) -> Result<(), LispError> {
    let contents = std::fs::read_to_string(source).map_err(|e| LispError::SourceUnreadable {
        path: source.display().to_string(),
        message: e.to_string(),
    })?;

    let statements = parser::parse(&contents)?;

    let mut environment = Environment::new();
    register_builtins(&mut environment);

    for statement in &statements {
        eval::execute(statement, &mut environment)?;
    }

    Ok(())
}

/// Prints the two-line fatal-error banner to stderr: `FATAL ERROR`, then a
/// tab-indented message, matching spec 6's exit-behaviour description.
fn report_fatal(err: &LispError, colored: bool) {
    eprintln!("{}", color::paint("FATAL ERROR", color::RED, colored));
    eprintln!("\t{err}");
}
