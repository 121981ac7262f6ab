//! Validation rule inspection
//!
//! Rules are only read here to infer the intended type of an attribute. A
//! rule may be declared as one `|`-delimited string (`"required|integer"`)
//! or as a list of tokens; both normalize to the same [`RuleSet`].
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator between tokens of a delimited rule string
pub const RULE_DELIMITER: char = '|';

const DATE_FORMAT_PREFIX: &str = "date_format:";

/// Rules keyed by attribute name
pub type RuleMap = IndexMap<String, RuleDeclaration>;

/// A rule as it was declared for one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleDeclaration {
    /// Tokens joined by `|`
    Delimited(String),
    /// Tokens already split
    List(Vec<String>),
}

impl RuleDeclaration {
    /// Normalize into an ordered token list.
    ///
    /// Delimited strings are split and each token trimmed. Lists are used
    /// as given.
    pub fn normalize(&self) -> RuleSet {
        match self {
            RuleDeclaration::Delimited(rule) => RuleSet(
                rule.split(RULE_DELIMITER)
                    .map(|token| token.trim().to_string())
                    .collect(),
            ),
            RuleDeclaration::List(tokens) => RuleSet(tokens.clone()),
        }
    }
}

impl From<&str> for RuleDeclaration {
    fn from(rule: &str) -> Self {
        RuleDeclaration::Delimited(rule.to_string())
    }
}

impl From<String> for RuleDeclaration {
    fn from(rule: String) -> Self {
        RuleDeclaration::Delimited(rule)
    }
}

impl From<Vec<String>> for RuleDeclaration {
    fn from(tokens: Vec<String>) -> Self {
        RuleDeclaration::List(tokens)
    }
}

impl From<Vec<&str>> for RuleDeclaration {
    fn from(tokens: Vec<&str>) -> Self {
        RuleDeclaration::List(tokens.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RuleDeclaration {
    fn from(tokens: [&str; N]) -> Self {
        RuleDeclaration::List(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Normalized rule tokens for one attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet(Vec<String>);

impl RuleSet {
    /// An empty rule set
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tokens in declaration order
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check for a literal token
    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }

    pub fn has_boolean(&self) -> bool {
        self.contains("boolean")
    }

    pub fn has_integer(&self) -> bool {
        self.contains("integer")
    }

    pub fn has_numeric(&self) -> bool {
        self.contains("numeric")
    }

    pub fn has_date(&self) -> bool {
        self.contains("date")
    }

    /// Check for a `date_format:<fmt>` token
    pub fn has_date_format(&self) -> bool {
        self.iter().any(|t| date_format_param(t).is_some())
    }

    /// Check for either date rule
    pub fn has_date_rules(&self) -> bool {
        self.has_date() || self.has_date_format()
    }

    /// The format of the first `date_format:` token
    pub fn date_time_format(&self) -> Option<&str> {
        self.iter().find_map(date_format_param)
    }

    /// Number of type-driving rules present.
    ///
    /// More than one is a declaration mistake; the first in checked order
    /// (boolean, integer, numeric, date, date_format) wins.
    pub fn type_rule_count(&self) -> usize {
        [
            self.has_boolean(),
            self.has_integer(),
            self.has_numeric(),
            self.has_date(),
            self.has_date_format(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The parameter of a `date_format:` token.
///
/// The `date_format` name is matched case-insensitively; the parameter is
/// returned exactly as written.
pub fn date_format_param(token: &str) -> Option<&str> {
    let prefix = token.get(..DATE_FORMAT_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(DATE_FORMAT_PREFIX) {
        token.get(DATE_FORMAT_PREFIX.len()..)
    } else {
        None
    }
}

/// Source of validation rules for the attributes of one request
pub trait RuleSource {
    /// Every declared rule, keyed by attribute name
    fn rules(&self) -> &RuleMap;

    /// The rule declared for `key`, if any
    fn rule(&self, key: &str) -> Option<&RuleDeclaration> {
        self.rules().get(key)
    }
}

impl RuleSource for RuleMap {
    fn rules(&self) -> &RuleMap {
        self
    }
}
