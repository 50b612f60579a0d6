use crate::censor::{CensorSet, CensoredPattern};
use crate::domain::Domain;
use crate::error::{FinderError, Result};

/// A lookup query: either a raw censored string or a pre-built pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Censored domain or email address, built with the finder's censoring set
    Raw(String),
    /// Pattern built by the caller with its own censoring set
    Pattern(CensoredPattern),
}

impl Query {
    /// Normalize into a pattern. Raw queries lose their email local part.
    pub fn into_pattern(self, censor: &CensorSet) -> CensoredPattern {
        match self {
            Query::Raw(raw) => CensoredPattern::from_query(&raw, censor.clone()),
            Query::Pattern(pattern) => pattern,
        }
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::Raw(value.to_string())
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Query::Raw(value)
    }
}

impl From<CensoredPattern> for Query {
    fn from(value: CensoredPattern) -> Self {
        Query::Pattern(value)
    }
}

impl TryFrom<serde_json::Value> for Query {
    type Error = FinderError;

    /// Only JSON strings are accepted as queries.
    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Query::Raw(s)),
            other => Err(FinderError::InvalidQuery(format!(
                "query must be a string or a censored pattern, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Outcome for a single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The candidate domain
    pub domain: Domain,
    /// Whether it is consistent with the pattern
    pub matched: bool,
}

/// Full report: every catalog entry with its outcome, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    outcomes: Vec<MatchOutcome>,
}

impl MatchReport {
    pub(crate) fn new(outcomes: Vec<MatchOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of candidates examined.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchOutcome> {
        self.outcomes.iter()
    }

    /// Outcome for a given domain string, if it is part of the catalog.
    pub fn get(&self, domain: &str) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.domain.as_str() == domain)
            .map(|o| o.matched)
    }

    /// Matching domains only, catalog order preserved.
    pub fn matches(&self) -> Vec<Domain> {
        self.outcomes
            .iter()
            .filter(|o| o.matched)
            .map(|o| o.domain.clone())
            .collect()
    }
}

impl IntoIterator for MatchReport {
    type Item = MatchOutcome;
    type IntoIter = std::vec::IntoIter<MatchOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}
