//! Sign normalization
//!
//! Runs of `+`/`-` collapse into one net sign: an odd number of minuses
//! gives `-`, otherwise `+`. The first operand of a line gets an implicit
//! leading `+` so every operand carries an explicit sign.

use crate::lexer::{Operator, Token};
use num_bigint::BigInt;
use std::iter;

/// Collapse every sign run in `input` into a single sign adjacent to its operand.
///
/// ```
/// use smartcalc::normalize::normalize_signs;
///
/// assert_eq!(normalize_signs("2---3"), "+2-3");
/// assert_eq!(normalize_signs("2 - - 3"), "+2 +3");
/// ```
pub fn normalize_signs(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + 1);
    // Some(true) while inside a run whose net sign is minus
    let mut pending: Option<bool> = None;

    for c in iter::once('+').chain(input.trim().chars()) {
        match c {
            '+' | '-' => {
                let negative = pending.unwrap_or(false) ^ (c == '-');
                pending = Some(negative);
            }
            c if c.is_whitespace() => {
                if pending.is_none() && !output.ends_with(' ') {
                    output.push(' ');
                }
            }
            c => {
                if let Some(negative) = pending.take() {
                    output.push(if negative { '-' } else { '+' });
                }
                output.push(c);
            }
        }
    }

    if let Some(negative) = pending {
        output.push(if negative { '-' } else { '+' });
    }

    output
}

/// Parse a `[+-]*digits` literal, folding its sign run.
pub fn parse_signed(literal: &str) -> Option<BigInt> {
    let normalized = normalize_signs(literal);
    let (negative, digits) = match normalized.split_at(1) {
        ("-", digits) => (true, digits),
        (_, digits) => (false, digits),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let magnitude: BigInt = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Rewrite signs that sit where an operand is expected.
///
/// A `+` in operand position is dropped. A `-` right after another operator
/// is bracketed together with its operand (`2*-3` becomes `2*(-3)`), which
/// leaves the parser to see every unary minus at the start of a group.
/// The operand is the next integer or identifier, or the next whole
/// parenthesized group.
pub fn fold_unary_signs(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut depth = 0usize;
    // depths of opened `(-` groups still waiting for their operand
    let mut owed: Vec<usize> = Vec::new();

    for token in tokens {
        let after_operator = matches!(output.last(), Some(Token::Operator(_)));
        let operand_position = after_operator || matches!(output.last(), None | Some(Token::LeftParen));

        match token {
            Token::Operator(Operator::Add) if operand_position => {}
            Token::Operator(Operator::Sub) if after_operator => {
                output.push(Token::LeftParen);
                output.push(Token::Operator(Operator::Sub));
                depth += 1;
                owed.push(depth);
            }
            Token::LeftParen => {
                output.push(Token::LeftParen);
                depth += 1;
            }
            Token::RightParen => {
                output.push(Token::RightParen);
                depth = depth.saturating_sub(1);
                close_owed(&mut output, &mut owed, &mut depth);
            }
            operand @ (Token::Integer(_) | Token::Identifier(_)) => {
                output.push(operand);
                close_owed(&mut output, &mut owed, &mut depth);
            }
            other => output.push(other),
        }
    }

    for _ in owed {
        output.push(Token::RightParen);
    }

    output
}

/// An operand just ended at `depth`: close every `(-` group it completes
fn close_owed(output: &mut Vec<Token>, owed: &mut Vec<usize>, depth: &mut usize) {
    while owed.last() == Some(&*depth) {
        owed.pop();
        output.push(Token::RightParen);
        *depth -= 1;
    }
}
