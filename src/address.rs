use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// Positional path from the outline root, e.g. `.0.2`.
///
/// An address indexes siblings by position at each level and is only valid
/// against the tree it was resolved on: removing or reordering an earlier
/// sibling anywhere along the path invalidates it. Callers re-resolve after
/// every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(Vec<usize>);

/// Syntax error for a malformed address token.
///
/// Kept separate from [`crate::errors::OutlineError`]: a malformed token is a
/// usage problem and surfaces through clap, not through the edit engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid address '{input}': {reason}")]
pub struct AddressSyntaxError {
    pub input: String,
    pub reason: String,
}

impl Address {
    pub fn new(components: Vec<usize>) -> Self {
        Self(components)
    }

    /// The empty address `.`: the synthetic root anchor.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn components(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Address of the child at `index` below this address.
    pub fn child(&self, index: usize) -> Address {
        let mut components = self.0.clone();
        components.push(index);
        Address(components)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, ".")
        } else {
            write!(f, ".{}", self.0.iter().join("."))
        }
    }
}

impl FromStr for Address {
    type Err = AddressSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: String| AddressSyntaxError {
            input: s.to_string(),
            reason,
        };
        let rest = s
            .strip_prefix('.')
            .ok_or_else(|| err("must start with '.'".to_string()))?;
        if rest.is_empty() {
            return Ok(Address::root());
        }
        let mut components = Vec::new();
        for part in rest.split('.') {
            let index: usize = part
                .parse()
                .map_err(|_| err(format!("'{}' is not a non-negative integer", part)))?;
            components.push(index);
        }
        Ok(Address(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(".0", vec![0])]
    #[case(".0.2", vec![0, 2])]
    #[case(".12.3.0", vec![12, 3, 0])]
    fn test_parse_valid(#[case] input: &str, #[case] expected: Vec<usize>) {
        let address: Address = input.parse().unwrap();
        assert_eq!(address.components(), expected.as_slice());
    }

    #[test]
    fn test_parse_root() {
        let address: Address = ".".parse().unwrap();
        assert!(address.is_root());
    }

    #[rstest]
    #[case("0.2")]
    #[case("")]
    #[case(".x")]
    #[case(".-1")]
    #[case("..0")]
    #[case(".0.")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(input.parse::<Address>().is_err());
    }

    #[rstest]
    #[case(".")]
    #[case(".0")]
    #[case(".0.2.14")]
    fn test_display_round_trips(#[case] input: &str) {
        let address: Address = input.parse().unwrap();
        assert_eq!(address.to_string(), input);
    }

    #[test]
    fn test_child() {
        let address: Address = ".0".parse().unwrap();
        assert_eq!(address.child(3).to_string(), ".0.3");
    }
}
