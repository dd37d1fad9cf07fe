use std::{
    fs,
    io::{self, IsTerminal},
    path::PathBuf,
    process,
};

use clap::Parser;
use mandrill::{interpret, repl};

/// mandrill runs scripts written in a small, dynamically typed language with
/// closures, arrays and hashes. Without a script it starts an interactive
/// shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of a script file to run.
    script: Option<PathBuf>,

    /// Runs the given source text instead of a script file.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "script")]
    eval: Option<String>,

    /// Prints the value of the program after running a script or `--eval`
    /// source.
    #[arg(short, long)]
    print_result: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match (args.eval, args.script) {
        (Some(source), _) => source,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the script '{}': {e}", path.display());
                process::exit(1);
            },
        },
        (None, None) => {
            if io::stdin().is_terminal() {
                println!("mandrill {}; type '{}' to quit.",
                         env!("CARGO_PKG_VERSION"),
                         repl::EXIT_COMMAND);
            }
            if let Err(e) = repl::start(io::stdin().lock(), io::stdout()) {
                eprintln!("{e}");
                process::exit(1);
            }
            return;
        },
    };

    match interpret(&source) {
        Ok(value) => {
            if args.print_result {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
