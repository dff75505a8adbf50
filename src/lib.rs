//! smartcalc - Smart Calculator
//!
//! # Overview
//!
//! smartcalc evaluates integer expressions line by line. Values are
//! arbitrary-precision integers, and named variables hold results between
//! lines.
//!
//! ```text
//! 2 + 2 * 3          # 8
//! 2 --- 3            # -1 (sign runs fold: odd minuses give minus)
//! (2 + 3) * 4        # 20
//! a = 5              # bind a
//! b = a              # copy a's value into b
//! a * -b             # -25
//! /variables         # {a=5, b=5}
//! /exit              # Bye!
//! ```
//!
//! # Pipeline
//!
//! An expression line is sign-normalized, checked for balanced brackets,
//! tokenized, has its variables substituted, is converted to postfix with a
//! shunting-yard pass, and is finally reduced on an integer stack.
//!
//! # Example
//!
//! ```rust
//! use smartcalc::{Calculator, Outcome};
//!
//! let mut calc = Calculator::new();
//! calc.handle_line("a = 6");
//! assert_eq!(calc.handle_line("a * 7"), Outcome::Print("42".to_string()));
//! ```

pub mod brackets;
pub mod calculator;
pub mod eval;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod statement;
pub mod store;

// Re-export commonly used items
pub use calculator::{CalcError, Calculator, Outcome};
pub use eval::{evaluate, EvalError};
pub use lexer::{lex, LexError, Operator, Token};
pub use parser::{to_postfix, ParseError, Postfix, Term};
pub use statement::{Command, Statement};
pub use store::{UnknownVariable, VariableStore};
