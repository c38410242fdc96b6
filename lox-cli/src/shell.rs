use std::io;
use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Error;

use lox_core::error::ConsoleReporter;
use lox_core::token::Token;
use lox_lexer::Scanner;

/// Launches an interactive Read-Scan-Print loop.
///
/// Each submitted line is scanned with a fresh reporter, so a malformed line
/// never poisons the rest of the session.
pub fn interactive(verbose: bool) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut counter = 0;
    let mut line = String::new();
    loop {
        write!(&mut stdout, "({}) Lox Shell | ", counter)?;
        stdout.flush()?;
        line.clear();
        stdin.read_line(&mut line)?;
        if line.is_empty() {
            writeln!(&mut stdout, "exit")?;
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        let start = Instant::now();
        let mut reporter = ConsoleReporter::new();
        let tokens: Vec<Token> = Scanner::new(line, &mut reporter).scan_tokens();
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
        counter += 1;
    }

    Ok(())
}
