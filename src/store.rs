//! Variable store
//!
//! Maps identifiers to fully resolved big-integer values. Bindings are
//! created or overwritten by assignments and live as long as the store.

use crate::lexer::{Operator, Token};
use num_bigint::BigInt;
use num_traits::Signed;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown variable: {0}")]
pub struct UnknownVariable(pub String);

/// Bindings kept in first-assignment order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    bindings: Vec<(String, BigInt)>,
    index: HashMap<String, usize>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.index.get(name).map(|&slot| &self.bindings[slot].1)
    }

    /// Look up a binding, failing with the name when it is unbound
    pub fn resolve(&self, name: &str) -> Result<&BigInt, UnknownVariable> {
        self.get(name).ok_or_else(|| UnknownVariable(name.to_string()))
    }

    /// Bind `name` to a copy of `value`. Rebinding keeps the name's original position.
    pub fn assign(&mut self, name: impl Into<String>, value: BigInt) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.bindings[slot].1 = value,
            None => {
                self.index.insert(name.clone(), self.bindings.len());
                self.bindings.push((name, value));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Replace every identifier with its bound value in parentheses.
    ///
    /// A negative value becomes `( - magnitude )` so the parser treats the
    /// sign as a unary minus at the start of a group. Substituted tokens are
    /// never rescanned.
    pub fn substitute(&self, tokens: Vec<Token>) -> Result<Vec<Token>, UnknownVariable> {
        let mut output = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Identifier(name) => {
                    let value = self.resolve(&name)?;
                    output.push(Token::LeftParen);
                    if value.is_negative() {
                        output.push(Token::Operator(Operator::Sub));
                    }
                    output.push(Token::Integer(value.abs()));
                    output.push(Token::RightParen);
                }
                other => output.push(other),
            }
        }

        Ok(output)
    }
}

impl fmt::Display for VariableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn assign_and_get() {
        let mut store = VariableStore::new();
        assert!(store.is_empty());
        store.assign("a", BigInt::from(5));
        assert_eq!(store.get("a"), Some(&BigInt::from(5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reassign_overwrites() {
        let mut store = VariableStore::new();
        store.assign("a", BigInt::from(5));
        store.assign("a", BigInt::from(-2));
        assert_eq!(store.get("a"), Some(&BigInt::from(-2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_unbound_names_the_variable() {
        let store = VariableStore::new();
        assert_eq!(store.resolve("z"), Err(UnknownVariable("z".to_string())));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut store = VariableStore::new();
        store.assign("n", BigInt::from(1));
        assert!(store.get("N").is_none());
    }

    #[test]
    fn substitute_wraps_values_in_parens() {
        let mut store = VariableStore::new();
        store.assign("a", BigInt::from(5));
        store.assign("b", BigInt::from(-3));
        let tokens = store.substitute(lex("a*b").unwrap()).unwrap();
        assert_eq!(tokens, lex("(5)*(-3)").unwrap());
    }

    #[test]
    fn substitute_fails_on_unbound() {
        let mut store = VariableStore::new();
        store.assign("a", BigInt::from(5));
        let err = store.substitute(lex("a + z").unwrap()).unwrap_err();
        assert_eq!(err, UnknownVariable("z".to_string()));
    }

    #[test]
    fn display_lists_bindings_in_assignment_order() {
        let mut store = VariableStore::new();
        store.assign("b", BigInt::from(2));
        store.assign("a", BigInt::from(-1));
        store.assign("b", BigInt::from(7));
        assert_eq!(store.to_string(), "{b=7, a=-1}");
        assert_eq!(VariableStore::new().to_string(), "{}");
    }
}
