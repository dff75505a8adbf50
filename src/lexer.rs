//! Tokenization for smartcalc expressions
//!
//! Tokens are the atomic elements of a sign-normalized expression line.

use nom::{
    branch::alt,
    character::complete::{alpha1, char, digit1, multispace0, one_of},
    combinator::{map, map_opt, map_res, value},
    multi::many0,
    sequence::preceded,
    IResult,
};
use num_bigint::BigInt;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // ^
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Binding strength used by the shunting-yard parser
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An unsigned run of digits; signs are separate operator tokens
    Integer(BigInt),
    /// A variable name
    Identifier(String),
    /// One of + - * / ^
    Operator(Operator),
    LeftParen,
    RightParen,
}

#[derive(Error, Debug, PartialEq)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
}

/// Parse a run of decimal digits
fn integer(input: &str) -> IResult<&str, Token> {
    map_res(digit1, |s: &str| s.parse::<BigInt>().map(Token::Integer))(input)
}

/// Parse a run of ASCII letters
fn identifier(input: &str) -> IResult<&str, Token> {
    map(alpha1, |s: &str| Token::Identifier(s.to_string()))(input)
}

fn operator(input: &str) -> IResult<&str, Token> {
    map_opt(one_of("+-*/^"), |c| Operator::from_symbol(c).map(Token::Operator))(input)
}

fn left_paren(input: &str) -> IResult<&str, Token> {
    value(Token::LeftParen, char('('))(input)
}

fn right_paren(input: &str) -> IResult<&str, Token> {
    value(Token::RightParen, char(')'))(input)
}

/// Parse any single token
fn token(input: &str) -> IResult<&str, Token> {
    preceded(
        multispace0,
        alt((integer, identifier, operator, left_paren, right_paren)),
    )(input)
}

/// Tokenize a complete expression
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    // Every token parser consumes input and only fails recoverably, so many0 stops cleanly
    let (remaining, tokens) = many0(token)(input).unwrap_or((input, Vec::new()));

    if let Some(c) = remaining.trim().chars().next() {
        return Err(LexError::UnexpectedChar(c));
    }

    Ok(tokens)
}
