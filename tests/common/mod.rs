//! Common test utilities for smartcalc integration tests

pub use smartcalc::{Calculator, Outcome};

/// Feed lines to a fresh calculator and collect everything it prints
pub fn run(lines: &[&str]) -> Vec<String> {
    let mut calc = Calculator::new();
    run_with(&mut calc, lines)
}

/// Feed lines to an existing calculator, stopping after /exit
#[allow(dead_code)]
pub fn run_with(calc: &mut Calculator, lines: &[&str]) -> Vec<String> {
    let mut printed = Vec::new();
    for line in lines {
        match calc.handle_line(line) {
            Outcome::Silent => {}
            Outcome::Print(text) => printed.push(text),
            Outcome::Exit(text) => {
                printed.push(text);
                break;
            }
        }
    }
    printed
}

/// Evaluate a single line and return what it prints
#[allow(dead_code)]
pub fn eval(line: &str) -> String {
    run(&[line]).join("\n")
}
