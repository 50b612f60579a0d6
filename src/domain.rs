use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::censor::CensoredPattern;
use crate::scheme::Scheme;

/// Label grammar for domains: lowercase alphanumerics and hyphens, labels of
/// 1-63 characters that neither start nor end with a hyphen.
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .expect("DOMAIN_PATTERN: hardcoded regex is invalid")
});

/// Maximum number of dots a valid domain may contain.
const MAX_DOTS: usize = 3;

/// Check whether `domain` is a syntactically valid domain.
///
/// The string is checked as given: uppercase and non-ASCII characters make it
/// invalid.
pub fn is_valid_domain(domain: &str) -> bool {
    let dots = domain.matches('.').count();
    (1..=MAX_DOTS).contains(&dots) && DOMAIN_PATTERN.is_match(domain)
}

/// A reference domain with its dense scheme.
///
/// Equality and hashing only consider the domain string.
#[derive(Debug, Clone)]
pub struct Domain {
    value: String,
    valid: bool,
    length: usize,
    scheme: Scheme,
}

impl Domain {
    /// Create a domain, computing its validity.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = is_valid_domain(&value);
        Self::build(value, valid)
    }

    /// Create a domain with a forced validity, skipping the validator.
    pub fn with_validity(value: impl Into<String>, valid: bool) -> Self {
        Self::build(value.into(), valid)
    }

    fn build(value: String, valid: bool) -> Self {
        let scheme = Scheme::dense(&value);
        Self {
            length: scheme.len(),
            value,
            valid,
            scheme,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Check whether this domain is consistent with a censored pattern.
    ///
    /// Lengths must be equal and every visible character of the pattern must
    /// be found at the same position here. The length check runs first, so
    /// the scheme lookup never reaches past the end of the domain.
    pub fn matches(&self, pattern: &CensoredPattern) -> bool {
        self.length == pattern.len() && pattern.scheme().agrees_with(&self.scheme)
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Domain {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Domain {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
