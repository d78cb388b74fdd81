use std::{fs, path::PathBuf, process, time::Instant};

use arrow_lang::{
    config::Config,
    error::Error,
    interpreter::evaluator::{console::StdConsole, core::Evaluator},
    parse, tokenize,
};
use clap::Parser;

/// Arrow is a small imperative scripting language with arrow-shaped
/// operators, typed constants and an auto-invoked `main`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the `.arrow` script to run.
    file: PathBuf,

    /// Prints the tokens, the syntax tree and the final environment.
    #[arg(short, long)]
    debug: bool,

    /// Requires `main` and rejects assignments to undeclared variables.
    #[arg(short, long)]
    strict: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to read the input file '{}': {e}", args.file.display());
        process::exit(1);
    });

    let start = Instant::now();
    if let Err(e) = execute(&source, &args) {
        eprintln!("Error: {e}");
        eprintln!("Suggested fix: {}", suggested_fix(&e));
        process::exit(1);
    }

    println!("Program exited successfully in {}ms", start.elapsed().as_millis());
}

fn execute(source: &str, args: &Args) -> Result<(), Error> {
    let config = if args.strict { Config::strict() } else { Config::default() };

    let tokens = tokenize(source)?;
    if args.debug {
        println!("Tokens:");
        for token in &tokens {
            println!("  {}:{} {:?} {:?}", token.line, token.column, token.kind, token.text);
        }
    }

    let program = parse(&tokens)?;
    if args.debug {
        println!("Abstract Syntax Tree (AST):");
        println!("{program:#?}");
    }

    let environment = Evaluator::new(config, StdConsole).evaluate(&program)?;
    if args.debug {
        println!("Environment:");
        println!("{environment}");
    }

    Ok(())
}

/// Maps an error to a remediation hint by its message.
fn suggested_fix(error: &Error) -> &'static str {
    let message = error.to_string();

    if message.contains("Expected") {
        "Check the syntax near the indicated line and column."
    } else if message.contains("Undefined variable") {
        "Ensure the variable is declared before use."
    } else if message.contains("Cannot reassign constant variable") {
        "Avoid reassigning a constant variable."
    } else if message.contains("Stack overflow") {
        "Make sure every recursive function reaches a case that returns without calling itself."
    } else if message.contains("Missing entry point") {
        "Declare a function `<fn> main() { ... }` that takes no parameters."
    } else {
        "Refer to the documentation for more details."
    }
}
