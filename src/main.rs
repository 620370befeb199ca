use std::{fs, io};

use clap::Parser;
use skit::interpret;

/// skit is an interpreter for a tiny line-oriented scripting language with
/// integer, boolean, and string variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to interpret.
    script: String,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.script);
        std::process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = interpret(&source, &mut out) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
