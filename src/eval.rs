//! Postfix evaluation over arbitrary-precision integers

use crate::lexer::Operator;
use crate::parser::{Postfix, Term};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    #[error("Stack underflow: {0}")]
    StackUnderflow(Operator),
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Expression left {0} values on the stack")]
    LeftoverOperands(usize),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Power result is not finite")]
    PowerOverflow,
}

/// Reduce a postfix sequence to a single integer.
///
/// Each operator pops its right operand first, then its left. The sequence
/// is well formed only if exactly one value remains at the end.
pub fn evaluate(postfix: &Postfix) -> Result<BigInt, EvalError> {
    let mut stack: Vec<BigInt> = Vec::new();

    for term in postfix.terms() {
        match term {
            Term::Integer(n) => stack.push(n.clone()),
            Term::Operator(op) => {
                let right = stack.pop().ok_or(EvalError::StackUnderflow(*op))?;
                let left = stack.pop().ok_or(EvalError::StackUnderflow(*op))?;
                stack.push(apply(*op, left, right)?);
            }
        }
    }

    let result = stack.pop().ok_or(EvalError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(EvalError::LeftoverOperands(stack.len() + 1));
    }
    Ok(result)
}

fn apply(op: Operator, left: BigInt, right: BigInt) -> Result<BigInt, EvalError> {
    Ok(match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            // truncates toward zero
            left / right
        }
        Operator::Pow => power(&left, &right)?,
    })
}

/// `base ^ exponent` through f64, truncated back to an integer.
///
/// Lossy on purpose: the float is rendered with its shortest decimal form,
/// so `2^100` yields `1267650600228229400000000000000`. Only the low 32
/// bits of the exponent are used, read as a signed two's-complement `i32`,
/// so `2^4294967296` is `1`.
fn power(base: &BigInt, exponent: &BigInt) -> Result<BigInt, EvalError> {
    let base = base.to_f64().unwrap_or(f64::NAN);
    let exponent = low_i32(exponent);

    let value = base.powf(f64::from(exponent)).trunc();
    if !value.is_finite() {
        return Err(EvalError::PowerOverflow);
    }

    format!("{}", value)
        .parse::<BigInt>()
        .map_err(|_| EvalError::PowerOverflow)
}

/// Truncate to the low 32 bits; `&` on a negative BigInt sees two's complement
fn low_i32(n: &BigInt) -> i32 {
    (n & BigInt::from(u32::MAX)).to_u32().unwrap_or(0) as i32
}
