use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use rpncalc::{format_result, Engine, Expr};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates arithmetic expressions such as `2 + 3 * sqrt(16)`.
///
/// Expressions are read from the command line, or from standard input, one
/// per line, when none are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the postfix form of each expression before its value.
    #[arg(short, long)]
    postfix: bool,

    expressions: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let engine = Engine::new();

    let mut failed = false;
    if args.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => failed |= !run(&engine, &line, args.postfix),
                Err(err) => {
                    eprintln!("error: failed to read standard input: {}", err);
                    process::exit(1);
                }
            }
        }
    } else {
        for expression in &args.expressions {
            failed |= !run(&engine, expression, args.postfix);
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Evaluate and print one expression, returning whether it succeeded
fn run(engine: &Engine, expression: &str, postfix: bool) -> bool {
    if postfix && !expression.trim().is_empty() {
        if let Ok(expr) = Expr::parse(expression) {
            println!("{}", expr);
        }
    }
    match engine.calculate(expression) {
        Ok(value) => {
            println!("{}", format_result(value));
            true
        }
        Err(err) => {
            eprintln!("error: {}", err);
            false
        }
    }
}
