//! Line classification
//!
//! Each input line is matched against an ordered set of shapes; the first
//! match wins:
//!
//! 1. bare identifier            `a`
//! 2. literal assignment         `a = -5`
//! 3. variable assignment        `b = a`, `b = -a`
//! 4. anything else with `=`     invalid assignment
//! 5. empty line
//! 6. `/command`
//! 7. expression

use crate::normalize::parse_signed;
use nom::{
    character::complete::{alpha1, char, digit1, multispace0, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{delimited, pair, terminated},
    IResult,
};
use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    Help,
    Variables,
    Unknown(String),
}

impl Command {
    fn from_line(line: &str) -> Self {
        match line {
            "/exit" => Command::Exit,
            "/help" => Command::Help,
            "/variables" => Command::Variables,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Empty,
    /// Print the value bound to a name
    Show(String),
    AssignLiteral { name: String, value: BigInt },
    /// Copy another binding's value, negated when `negate` is set
    AssignVariable { name: String, source: String, negate: bool },
    InvalidAssignment,
    Command(Command),
    Expression(String),
}

/// `name =` with optional whitespace around the `=`
fn assignment_target(input: &str) -> IResult<&str, &str> {
    terminated(alpha1, delimited(multispace0, char('='), multispace0))(input)
}

/// At most one sign; `a = --5` is not an assignment shape
fn signed_literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn signed_identifier(input: &str) -> IResult<&str, (Option<char>, &str)> {
    pair(opt(one_of("+-")), alpha1)(input)
}

fn literal_assignment(line: &str) -> Option<Statement> {
    let (_, (name, literal)) = all_consuming(pair(assignment_target, signed_literal))(line).ok()?;
    let value = parse_signed(literal)?;
    Some(Statement::AssignLiteral { name: name.to_string(), value })
}

fn variable_assignment(line: &str) -> Option<Statement> {
    let (_, (name, (sign, source))) =
        all_consuming(pair(assignment_target, signed_identifier))(line).ok()?;
    let negate = sign == Some('-');
    Some(Statement::AssignVariable {
        name: name.to_string(),
        source: source.to_string(),
        negate,
    })
}

fn bare_identifier(line: &str) -> Option<Statement> {
    let (_, name) = all_consuming(alpha1::<&str, nom::error::Error<&str>>)(line).ok()?;
    Some(Statement::Show(name.to_string()))
}

impl Statement {
    /// Classify one input line; surrounding whitespace is ignored.
    pub fn classify(line: &str) -> Self {
        let line = line.trim();

        if let Some(statement) = bare_identifier(line)
            .or_else(|| literal_assignment(line))
            .or_else(|| variable_assignment(line))
        {
            return statement;
        }

        if line.contains('=') {
            Statement::InvalidAssignment
        } else if line.is_empty() {
            Statement::Empty
        } else if line.starts_with('/') {
            Statement::Command(Command::from_line(line))
        } else {
            Statement::Expression(line.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bare_identifier() {
        assert_eq!(Statement::classify("  abc "), Statement::Show("abc".to_string()));
    }

    #[test]
    fn classify_literal_assignment() {
        assert_eq!(
            Statement::classify("a = -5"),
            Statement::AssignLiteral { name: "a".to_string(), value: BigInt::from(-5) }
        );
        assert_eq!(
            Statement::classify("count=+12"),
            Statement::AssignLiteral { name: "count".to_string(), value: BigInt::from(12) }
        );
    }

    #[test]
    fn classify_variable_assignment() {
        assert_eq!(
            Statement::classify("b = a"),
            Statement::AssignVariable {
                name: "b".to_string(),
                source: "a".to_string(),
                negate: false,
            }
        );
        assert_eq!(
            Statement::classify("b=-a"),
            Statement::AssignVariable {
                name: "b".to_string(),
                source: "a".to_string(),
                negate: true,
            }
        );
    }

    #[test]
    fn classify_invalid_assignments() {
        assert_eq!(Statement::classify("a1 = 8"), Statement::InvalidAssignment);
        assert_eq!(Statement::classify("a = 7 = 8"), Statement::InvalidAssignment);
        assert_eq!(Statement::classify("a = b1"), Statement::InvalidAssignment);
        assert_eq!(Statement::classify("a = 2 + 3"), Statement::InvalidAssignment);
        assert_eq!(Statement::classify("= 5"), Statement::InvalidAssignment);
        assert_eq!(Statement::classify("a = --5"), Statement::InvalidAssignment);
        assert_eq!(Statement::classify("b = +-+a"), Statement::InvalidAssignment);
    }

    #[test]
    fn classify_empty() {
        assert_eq!(Statement::classify(""), Statement::Empty);
        assert_eq!(Statement::classify("   \t"), Statement::Empty);
    }

    #[test]
    fn classify_commands() {
        assert_eq!(Statement::classify("/exit"), Statement::Command(Command::Exit));
        assert_eq!(Statement::classify("/help"), Statement::Command(Command::Help));
        assert_eq!(Statement::classify("/variables"), Statement::Command(Command::Variables));
        assert_eq!(
            Statement::classify("/foo"),
            Statement::Command(Command::Unknown("/foo".to_string()))
        );
    }

    #[test]
    fn classify_expressions() {
        assert_eq!(
            Statement::classify(" 2 + 3 "),
            Statement::Expression("2 + 3".to_string())
        );
        assert_eq!(Statement::classify("-a"), Statement::Expression("-a".to_string()));
        assert_eq!(Statement::classify("a1"), Statement::Expression("a1".to_string()));
    }
}
