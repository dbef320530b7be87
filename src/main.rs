use std::fs;

use clap::Parser;
use reckon::{Calculator, Settings, repl::run_repl, util::num::DEFAULT_PRECISION};

/// reckon evaluates arithmetic expressions, remembering variables between
/// them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate each non-blank line in turn.
    #[arg(short, long)]
    file: bool,

    /// Report unknown variables, factorials outside their domain and
    /// non-finite results as errors.
    #[arg(short, long)]
    strict: bool,

    /// Decimal places computed results are rounded to.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: i32,

    /// The expression to evaluate. Starts an interactive session when
    /// omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut calculator = Calculator::with_settings(Settings { precision: args.precision,
                                                              strict:    args.strict, });

    let Some(contents) = args.contents else {
        run_repl(calculator);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut failed = false;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        match calculator.evaluate_formatted(line) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
