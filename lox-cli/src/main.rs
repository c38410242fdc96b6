//!
//! This is the command-line driver for the Lox toolchain.
//!
//! It runs the scanner over a file (or over lines read interactively) and
//! prints the resulting tokens, one per line.
//!
#![warn(missing_docs)]

use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

mod shell;

use lox_core::error::{ConsoleReporter, ErrorReporter};
use lox_lexer::Scanner;

#[derive(Debug, Clone, PartialEq, clap::Parser)]
#[clap(about, author)]
struct Options {
    /// File to scan.
    #[clap(name = "FILE")]
    file: Option<PathBuf>,

    /// Enable verbose output (with timing information).
    #[clap(short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts: Options = Options::parse();

    match opts.file {
        None => shell::interactive(opts.verbose)?,
        Some(file) => {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("could not read '{}'", file.display()))?;
            let had_error = run(&source, opts.verbose)?;
            if had_error {
                // EX_DATAERR, the input contained malformed lexemes.
                std::process::exit(65);
            }
        }
    }

    Ok(())
}

/// Scans the given source and prints the resulting tokens, returning whether
/// any diagnostic was recorded along the way.
fn run(source: &str, verbose: bool) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let start = Instant::now();
    let mut reporter = ConsoleReporter::new();
    let tokens = Scanner::new(source, &mut reporter).scan_tokens();
    let elapsed = start.elapsed();
    if verbose {
        writeln!(
            &mut stdout,
            "Scanning time: {} ms ({} µs)",
            elapsed.as_millis(),
            elapsed.as_micros(),
        )?;
    }

    for token in &tokens {
        writeln!(&mut stdout, "{}", token)?;
    }

    Ok(reporter.had_error())
}
