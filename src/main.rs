use std::{fs, io, process::ExitCode};

use clap::Parser;
use clu::{
    Config, run_to,
    interpreter::evaluator::core::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_ITERATIONS},
};
use tracing_subscriber::EnvFilter;

/// clu runs programs written in CLU, a small scripting language that reads
/// like English.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells clu to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Number of iterations after which a `repeat` loop is reported as
    /// non-terminating.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Maximum number of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Logs parsing and execution to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Prints every variable and its final value after the run.
    #[arg(long)]
    dump_variables: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let config = Config::default().with_max_iterations(args.max_iterations)
                                  .with_max_call_depth(args.max_call_depth);

    match run_to(&script, config, io::stdout().lock()) {
        Ok(variables) => {
            if args.dump_variables {
                for (name, value) in &variables {
                    println!("{name} = {}", value.literal());
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            ExitCode::FAILURE
        },
    }
}

/// Installs a stderr logger filtered by `RUST_LOG`, defaulting to warnings
/// only, or to debug output with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
