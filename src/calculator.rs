//! Per-line calculator session
//!
//! The `Calculator` owns the variable store and runs one input line at a
//! time through classification, assignment, command handling, or the
//! expression pipeline:
//!
//! ```text
//! normalize signs -> balance check -> lex -> substitute variables
//!     -> fold unary signs -> infix to postfix -> evaluate
//! ```

use crate::brackets::is_balanced;
use crate::eval::{evaluate, EvalError};
use crate::lexer::{lex, LexError};
use crate::normalize::{fold_unary_signs, normalize_signs};
use crate::parser::{to_postfix, ParseError};
use crate::statement::{Command, Statement};
use crate::store::{UnknownVariable, VariableStore};
use num_bigint::BigInt;
use thiserror::Error;

pub const HELP_TEXT: &str = "The program calculates the value of integer expressions.
Supported operators: + - * / ^ and parentheses, e.g.
  2 + 2 - 1
  2 -- 1
  1 +-+ 3
  (8 * 3 + 12) / 4 ^ 2
Variables hold integers: a = 5, b = a, b = -a
Commands: /help /variables /exit";

pub const EXIT_TEXT: &str = "Bye!";

/// Errors raised while handling a line.
///
/// The display text is the message shown to the user; the underlying cause
/// stays available through `source()`.
#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Invalid expression")]
    UnbalancedBrackets,
    #[error("Invalid expression")]
    Lex(#[from] LexError),
    #[error("Invalid expression")]
    Parse(#[from] ParseError),
    #[error("Invalid expression")]
    Eval(#[from] EvalError),
    #[error("Unknown variable")]
    UnknownVariable(#[from] UnknownVariable),
    #[error("Invalid identifier")]
    InvalidIdentifier(String),
    #[error("Invalid assignment")]
    InvalidAssignment,
    #[error("Unknown command")]
    UnknownCommand(String),
}

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to print
    Silent,
    Print(String),
    /// Print the message, then stop reading input
    Exit(String),
}

#[derive(Debug, Default)]
pub struct Calculator {
    store: VariableStore,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: VariableStore) -> Self {
        Calculator { store }
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Handle a line, turning any failure into its user message
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        self.execute(line)
            .unwrap_or_else(|e| Outcome::Print(e.to_string()))
    }

    /// Handle a line, keeping failures as errors
    pub fn execute(&mut self, line: &str) -> Result<Outcome, CalcError> {
        match Statement::classify(line) {
            Statement::Empty => Ok(Outcome::Silent),
            Statement::Show(name) => match self.store.get(&name) {
                Some(value) => Ok(Outcome::Print(value.to_string())),
                None => Err(CalcError::InvalidIdentifier(name)),
            },
            Statement::AssignLiteral { name, value } => {
                self.store.assign(name, value);
                Ok(Outcome::Silent)
            }
            Statement::AssignVariable { name, source, negate } => {
                let value = self.store.resolve(&source)?.clone();
                self.store.assign(name, if negate { -value } else { value });
                Ok(Outcome::Silent)
            }
            Statement::InvalidAssignment => Err(CalcError::InvalidAssignment),
            Statement::Command(command) => self.run_command(command),
            Statement::Expression(expr) => {
                let value = self.evaluate(&expr)?;
                Ok(Outcome::Print(value.to_string()))
            }
        }
    }

    fn run_command(&self, command: Command) -> Result<Outcome, CalcError> {
        match command {
            Command::Exit => Ok(Outcome::Exit(EXIT_TEXT.to_string())),
            Command::Help => Ok(Outcome::Print(HELP_TEXT.to_string())),
            Command::Variables => Ok(Outcome::Print(self.store.to_string())),
            Command::Unknown(name) => Err(CalcError::UnknownCommand(name)),
        }
    }

    /// Evaluate an expression against the current bindings
    pub fn evaluate(&self, expr: &str) -> Result<BigInt, CalcError> {
        let normalized = normalize_signs(expr);
        if !is_balanced(&normalized) {
            return Err(CalcError::UnbalancedBrackets);
        }

        let tokens = lex(&normalized)?;
        let tokens = self.store.substitute(tokens)?;
        let tokens = fold_unary_signs(tokens);
        let postfix = to_postfix(&tokens)?;
        Ok(evaluate(&postfix)?)
    }
}
