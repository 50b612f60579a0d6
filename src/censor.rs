//! Censoring alphabets and censored patterns.

use std::collections::BTreeSet;
use std::fmt;

use crate::scheme::Scheme;

/// Censoring character used when none is given.
pub const DEFAULT_CENSORING_CHAR: char = '*';

/// Set of single characters that stand in for unknown characters.
///
/// Multi-character strings are always decomposed: `"ab"` contributes `a` and
/// `b`, never the token `"ab"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CensorSet {
    chars: BTreeSet<char>,
}

impl CensorSet {
    /// An empty set. Schemes built with it are dense.
    pub fn empty() -> Self {
        Self {
            chars: BTreeSet::new(),
        }
    }

    /// Normalize any number of strings into a deduplicated character set.
    ///
    /// ```
    /// use emdofi::CensorSet;
    ///
    /// let set = CensorSet::from_parts(["ab", "c", "a"]);
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains('b'));
    /// ```
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = BTreeSet::new();
        for part in parts {
            chars.extend(part.as_ref().chars());
        }
        Self { chars }
    }

    /// Like [`CensorSet::from_parts`], falling back to the default set when
    /// the input yields no characters at all.
    pub fn from_parts_or_default<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Self::from_parts(parts);
        if set.is_empty() {
            Self::default()
        } else {
            set
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for CensorSet {
    fn default() -> Self {
        Self {
            chars: BTreeSet::from([DEFAULT_CENSORING_CHAR]),
        }
    }
}

impl fmt::Display for CensorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Strip the local part of an email address, keeping what follows the last `@`.
///
/// Inputs without `@` are returned unchanged.
pub fn strip_local_part(query: &str) -> &str {
    match query.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => query,
    }
}

/// A censored domain with its sparse scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensoredPattern {
    value: String,
    censor: CensorSet,
    scheme: Scheme,
    length: usize,
}

impl CensoredPattern {
    /// Build a pattern from a censored domain. The value is taken as is;
    /// use [`CensoredPattern::from_query`] to strip an email local part.
    pub fn new(value: impl Into<String>, censor: CensorSet) -> Self {
        let value = value.into();
        let scheme = Scheme::build(&value, &censor);
        let length = value.chars().count();
        Self {
            value,
            censor,
            scheme,
            length,
        }
    }

    /// Build a pattern from a censored domain or email address.
    pub fn from_query(query: &str, censor: CensorSet) -> Self {
        Self::new(strip_local_part(query), censor)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn censor(&self) -> &CensorSet {
        &self.censor
    }

    /// Positions that are visible in the pattern.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Length in characters, censored positions included.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for CensoredPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposes_multi_char_parts() {
        let set = CensorSet::from_parts(["ab", "c"]);
        let chars: Vec<char> = set.iter().collect();
        assert_eq!(chars, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_deduplicates() {
        let set = CensorSet::from_parts(["fff&", "*", "$$&"]);
        let chars: Vec<char> = set.iter().collect();
        assert_eq!(chars, vec!['$', '&', '*', 'f']);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(CensorSet::from_parts_or_default([""]), CensorSet::default());
        assert_eq!(
            CensorSet::from_parts_or_default(Vec::<String>::new()),
            CensorSet::default()
        );
        assert!(CensorSet::from_parts_or_default(["?"]).contains('?'));
        assert!(!CensorSet::from_parts_or_default(["?"]).contains('*'));
    }

    #[test]
    fn test_strip_local_part() {
        assert_eq!(strip_local_part("j***@g****.**m"), "g****.**m");
        assert_eq!(strip_local_part("a@b@example.com"), "example.com");
        assert_eq!(strip_local_part("example.com"), "example.com");
        assert_eq!(strip_local_part("user@"), "");
    }

    #[test]
    fn test_pattern_from_query() {
        let pattern = CensoredPattern::from_query("j***@g****.**m", CensorSet::from_parts(["*"]));
        assert_eq!(pattern.value(), "g****.**m");
        assert_eq!(pattern.len(), 9);
        assert_eq!(pattern.scheme().len(), 3);
        assert_eq!(pattern.to_string(), "g****.**m");
    }

    #[test]
    fn test_pattern_new_keeps_at_sign() {
        let pattern = CensoredPattern::new("a@b", CensorSet::default());
        assert_eq!(pattern.value(), "a@b");
        assert_eq!(pattern.len(), 3);
    }
}
