use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character class codes as used in the registry data contracts.
///
/// The codes mirror the field specifications that accompany the registry
/// exchange format: `N` for digit-only fields, `A` for letter-only fields,
/// and `AN` for free fields where only the length is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    /// `N`: zero or more ASCII decimal digits.
    #[serde(rename = "N")]
    Numeric,
    /// `A`: zero or more ASCII letters.
    #[serde(rename = "A")]
    Alphabetic,
    /// `AN`: length check only; character content is unconstrained.
    #[serde(rename = "AN")]
    Alphanumeric,
}

impl CharClass {
    /// Returns true if `value` satisfies this class's character pattern.
    ///
    /// The empty string satisfies every class. `AN` fields carry no class
    /// restriction in the exchange format, only a length limit.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            CharClass::Numeric => value.chars().all(|ch| ch.is_ascii_digit()),
            CharClass::Alphabetic => value.chars().all(|ch| ch.is_ascii_alphabetic()),
            CharClass::Alphanumeric => true,
        }
    }

    /// Canonical code as it appears in the field specifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Numeric => "N",
            CharClass::Alphabetic => "A",
            CharClass::Alphanumeric => "AN",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(CharClass::Numeric),
            "A" => Ok(CharClass::Alphabetic),
            "AN" => Ok(CharClass::Alphanumeric),
            _ => Err(format!("Unknown character class: {}", s)),
        }
    }
}

/// A single per-column constraint: character class plus maximum length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub column: String,
    pub class: CharClass,
    pub max_length: u32,
}

impl FieldRule {
    pub fn new(column: impl Into<String>, class: CharClass, max_length: u32) -> Self {
        Self {
            column: column.into(),
            class,
            max_length,
        }
    }
}

/// An ordered set of field rules for one feed.
///
/// Order is significant: violations are reported in rule order, then row
/// order, so runs over the same input are reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<FieldRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: FieldRule) {
        self.rules.push(rule);
    }

    /// Iterate rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    /// Look up the rule for a column (case-insensitive, matching how the
    /// incoming spreadsheets vary header casing).
    pub fn get(&self, column: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|rule| rule.column.eq_ignore_ascii_case(column))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a FieldRule;
    type IntoIter = std::slice::Iter<'a, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matching() {
        assert!(CharClass::Numeric.matches("12345678"));
        assert!(CharClass::Numeric.matches(""));
        assert!(!CharClass::Numeric.matches("1234A"));

        assert!(CharClass::Alphabetic.matches("Aalsmeer"));
        assert!(!CharClass::Alphabetic.matches("Aalsmeer1"));

        assert!(CharClass::Alphanumeric.matches("Handelsweg 12-b;"));
    }

    #[test]
    fn class_parsing_is_case_insensitive() {
        assert_eq!("n".parse::<CharClass>().unwrap(), CharClass::Numeric);
        assert_eq!(" AN ".parse::<CharClass>().unwrap(), CharClass::Alphanumeric);
        assert!("X".parse::<CharClass>().is_err());
    }

    #[test]
    fn lookup_ignores_header_casing() {
        let table = RuleTable::new(vec![FieldRule::new(
            "GLN_company_address_code",
            CharClass::Numeric,
            13,
        )]);
        assert!(table.get("gln_company_address_code").is_some());
        assert!(table.get("street_name").is_none());
    }
}
