//! smartcalc - interactive big-integer calculator
//!
//! Reads one statement per line from stdin until `/exit` or end of input.

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use smartcalc::{Calculator, Outcome};
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

/// Print what a handled line produced; returns false once the session should end
fn report(outcome: Outcome) -> bool {
    match outcome {
        Outcome::Silent => true,
        Outcome::Print(text) => {
            println!("{}", text);
            true
        }
        Outcome::Exit(text) => {
            println!("{}", text);
            false
        }
    }
}

/// Read lines from a non-interactive stdin
fn run_piped(calc: &mut Calculator) -> ExitCode {
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if !report(calc.handle_line(&line)) {
                    break;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Run the interactive session with line editing; history lives only in memory
fn run_repl(calc: &mut Calculator) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                if !report(calc.handle_line(trimmed)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let mut calc = Calculator::new();

    if !io::stdin().is_terminal() {
        return run_piped(&mut calc);
    }

    match run_repl(&mut calc) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
