//! Infix to postfix conversion
//!
//! A shunting-yard pass over substituted tokens. Unary minus is encoded by
//! emitting a literal `0` ahead of a binary `-`, so the postfix stream only
//! ever holds integers and binary operators.

use crate::lexer::{Operator, Token};
use num_bigint::BigInt;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unmatched ')'")]
    UnmatchedRightParen,
    #[error("Unmatched '('")]
    UnmatchedLeftParen,
    #[error("Unresolved identifier: {0}")]
    UnresolvedIdentifier(String),
}

/// One element of a postfix sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Integer(BigInt),
    Operator(Operator),
}

/// Reverse Polish token sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix(Vec<Term>);

impl Postfix {
    pub fn new(terms: Vec<Term>) -> Self {
        Postfix(terms)
    }

    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|term| match term {
                Term::Integer(n) => n.to_string(),
                Term::Operator(op) => op.to_string(),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Entries waiting on the operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// Convert an infix token stream to postfix.
///
/// Operators pop anything of equal or higher precedence, so every operator,
/// `^` included, is left-associative. After `^` the next position does not
/// expect a unary operand; after any other operator or `(` it does.
pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut expects_unary = true;

    for token in tokens {
        match token {
            Token::Integer(n) => {
                output.push(Term::Integer(n.clone()));
                expects_unary = false;
            }
            Token::LeftParen => {
                stack.push(Pending::LeftParen);
                expects_unary = true;
            }
            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Pending::Operator(op)) => output.push(Term::Operator(op)),
                        Some(Pending::LeftParen) => break,
                        None => return Err(ParseError::UnmatchedRightParen),
                    }
                }
                expects_unary = false;
            }
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Term::Operator(top));
                }
                if *op == Operator::Sub && expects_unary {
                    output.push(Term::Integer(BigInt::from(0)));
                }
                stack.push(Pending::Operator(*op));
                // TODO: `^` probably should re-arm unary operands like the other operators
                expects_unary = *op != Operator::Pow;
            }
            Token::Identifier(name) => {
                return Err(ParseError::UnresolvedIdentifier(name.clone()));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Term::Operator(op)),
            Pending::LeftParen => return Err(ParseError::UnmatchedLeftParen),
        }
    }

    Ok(Postfix(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn postfix(input: &str) -> String {
        to_postfix(&lex(input).unwrap()).unwrap().to_string()
    }

    #[test]
    fn precedence_orders_output() {
        assert_eq!(postfix("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
        assert_eq!(postfix("8*3+12*(4-2)"), "8 3 * 12 4 2 - * +");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(postfix("10-4-3"), "10 4 - 3 -");
        assert_eq!(postfix("2^3^2"), "2 3 ^ 2 ^");
    }

    #[test]
    fn unary_minus_emits_zero() {
        assert_eq!(postfix("-5"), "0 5 -");
        assert_eq!(postfix("(-5)*2"), "0 5 - 2 *");
    }

    #[test]
    fn minus_after_pow_is_binary() {
        // the position after ^ never expects a unary operand
        assert_eq!(postfix("2^-1"), "2 ^ 1 -");
    }

    #[test]
    fn minus_after_other_operator_is_unary() {
        assert_eq!(postfix("2*-1"), "2 * 0 1 -");
    }

    #[test]
    fn multi_digit_literals() {
        assert_eq!(postfix("123+4567"), "123 4567 +");
    }

    #[test]
    fn unmatched_parens_fail() {
        assert_eq!(
            to_postfix(&lex("2+3)").unwrap()),
            Err(ParseError::UnmatchedRightParen)
        );
        assert_eq!(
            to_postfix(&lex("(2+3").unwrap()),
            Err(ParseError::UnmatchedLeftParen)
        );
    }

    #[test]
    fn identifiers_must_be_substituted_first() {
        assert_eq!(
            to_postfix(&lex("a+1").unwrap()),
            Err(ParseError::UnresolvedIdentifier("a".to_string()))
        );
    }

    #[test]
    fn empty_input_gives_empty_postfix() {
        assert!(to_postfix(&[]).unwrap().is_empty());
    }
}
