//! Domain finder.
//!
//! Ties a loaded catalog to a censoring alphabet and answers queries against
//! it. Full reports are cached per pattern so repeated lookups skip the scan.

use std::io::Read;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::catalog::{read_catalog, Catalog, CatalogSource};
use crate::censor::{CensorSet, CensoredPattern};
use crate::domain::Domain;
use crate::error::{FinderError, Result};
use crate::matcher;
use crate::types::{MatchReport, Query};

/// Default LRU cache size for match reports
pub const DEFAULT_CACHE_SIZE: usize = 128;

/// Cache key: pattern text plus the censoring set it was built with
type CacheKey = (String, CensorSet);

/// Finder builder options.
#[derive(Debug, Clone)]
pub struct FinderOptions {
    /// Censoring characters applied to raw string queries
    pub censor: CensorSet,
    /// Drop catalog entries that fail the domain validator
    pub keep_only_valid: bool,
    /// LRU cache size for match reports
    pub cache_size: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            censor: CensorSet::default(),
            keep_only_valid: true,
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl FinderOptions {
    /// Create new finder options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set censoring characters. Multi-character strings are decomposed.
    pub fn with_censoring_chars<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.censor = CensorSet::from_parts_or_default(parts);
        self
    }

    /// Keep or drop invalid catalog entries.
    pub fn with_keep_only_valid(mut self, keep_only_valid: bool) -> Self {
        self.keep_only_valid = keep_only_valid;
        self
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Finds catalog domains consistent with a censored query.
///
/// ```
/// use emdofi::{CatalogSource, DomainFinder, FinderOptions};
///
/// let source = CatalogSource::Text("gmail.com\ngmial.com\nyahoo.com".to_string());
/// let finder = DomainFinder::new(Some(source), FinderOptions::default()).unwrap();
///
/// let found: Vec<String> = finder
///     .find("g****.**m")
///     .iter()
///     .map(|d| d.to_string())
///     .collect();
/// assert_eq!(found, vec!["gmail.com", "gmial.com"]);
/// ```
pub struct DomainFinder {
    catalog: Catalog,
    censor: CensorSet,
    cache: Mutex<LruCache<CacheKey, MatchReport>>,
}

impl DomainFinder {
    /// Create a finder from a catalog source.
    ///
    /// A missing source is a configuration error.
    pub fn new(source: Option<CatalogSource>, options: FinderOptions) -> Result<Self> {
        let source = source.ok_or_else(|| {
            FinderError::ConfigError("a catalog source is required".to_string())
        })?;
        let catalog = Catalog::load(&source, options.keep_only_valid)?;
        Ok(Self::from_catalog(catalog, options))
    }

    /// Create a finder over an already loaded catalog.
    pub fn from_catalog(catalog: Catalog, options: FinderOptions) -> Self {
        let cache_size = NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            catalog,
            censor: options.censor,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Load the bundled email provider catalog.
    pub fn load_default(options: FinderOptions) -> Result<Self> {
        Self::new(Some(CatalogSource::Embedded), options)
    }

    /// Load a catalog from text (JSON array or one domain per line).
    pub fn loads(text: &str, options: FinderOptions) -> Result<Self> {
        Self::new(Some(CatalogSource::Text(text.to_string())), options)
    }

    /// Load a catalog from a reader.
    pub fn load(reader: impl Read, options: FinderOptions) -> Result<Self> {
        let entries = read_catalog(reader)?;
        let catalog = Catalog::from_entries(entries, options.keep_only_valid);
        Ok(Self::from_catalog(catalog, options))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn censor(&self) -> &CensorSet {
        &self.censor
    }

    /// Replace the censoring characters used for raw string queries.
    ///
    /// Empty input falls back to the default set.
    pub fn set_censoring_chars<I, S>(&mut self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.censor = CensorSet::from_parts_or_default(parts);
        self.clear_cache();
    }

    /// Build a pattern from a query using this finder's censoring set.
    pub fn pattern(&self, query: impl Into<Query>) -> CensoredPattern {
        query.into().into_pattern(&self.censor)
    }

    /// Matching domains only, in catalog order.
    pub fn find(&self, query: impl Into<Query>) -> Vec<Domain> {
        let pattern = self.pattern(query);
        let key = cache_key(&pattern);

        let cached = self.cache.lock().get(&key).map(MatchReport::matches);
        if let Some(found) = cached {
            trace!(pattern = %pattern, "report cache hit");
            return found;
        }

        let found = matcher::match_domains(&pattern, self.catalog.entries());
        debug!(
            pattern = %pattern,
            candidates = self.catalog.len(),
            matches = found.len(),
            "pattern matched"
        );
        found
    }

    /// Every catalog entry with its match outcome, in catalog order.
    pub fn report(&self, query: impl Into<Query>) -> MatchReport {
        let pattern = self.pattern(query);
        let key = cache_key(&pattern);

        let cached = self.cache.lock().get(&key).cloned();
        if let Some(cached) = cached {
            trace!(pattern = %pattern, "report cache hit");
            return cached;
        }

        // The lock is not held during the scan: the scan runs on the rayon
        // pool, which may re-enter this method on the same thread.
        let report = matcher::report(&pattern, self.catalog.entries());
        debug!(
            pattern = %pattern,
            candidates = report.len(),
            matches = report.iter().filter(|o| o.matched).count(),
            "pattern reported"
        );
        self.cache.lock().put(key, report.clone());
        report
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.catalog.iter()
    }

    /// Clear the report cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    #[cfg(test)]
    fn cached_reports(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<'a> IntoIterator for &'a DomainFinder {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.catalog.iter()
    }
}

fn cache_key(pattern: &CensoredPattern) -> CacheKey {
    (pattern.value().to_string(), pattern.censor().clone())
}

/// Look up a censored domain or email in the bundled catalog.
///
/// `censoring` lists the censoring characters; strings are decomposed into
/// single characters.
pub fn find<I, S>(query: &str, censoring: I) -> Result<Vec<Domain>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = FinderOptions::new().with_censoring_chars(censoring);
    let finder = DomainFinder::load_default(options)?;
    Ok(finder.find(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder(text: &str) -> DomainFinder {
        DomainFinder::loads(text, FinderOptions::default()).unwrap()
    }

    fn values(domains: &[Domain]) -> Vec<&str> {
        domains.iter().map(Domain::as_str).collect()
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let result = DomainFinder::new(None, FinderOptions::default());
        assert!(matches!(result, Err(FinderError::ConfigError(_))));
    }

    #[test]
    fn test_find() {
        let finder = finder("gmail.com\ngmial.com\nyahoo.com");
        assert_eq!(values(&finder.find("g****.**m")), vec!["gmail.com", "gmial.com"]);
    }

    #[test]
    fn test_find_strips_email_local_part() {
        let finder = finder("gmail.com\nyahoo.com");
        assert_eq!(values(&finder.find("j****@y****.com")), vec!["yahoo.com"]);
    }

    #[test]
    fn test_report_is_cached() {
        let finder = finder("gmail.com\nyahoo.com");
        assert_eq!(finder.cached_reports(), 0);
        let first = finder.report("g****.**m");
        assert_eq!(finder.cached_reports(), 1);
        let second = finder.report("g****.**m");
        assert_eq!(first, second);
        assert_eq!(finder.cached_reports(), 1);

        // find() reads the cache without populating it
        assert_eq!(values(&finder.find("g****.**m")), vec!["gmail.com"]);
        finder.find("y****.**m");
        assert_eq!(finder.cached_reports(), 1);

        finder.clear_cache();
        assert_eq!(finder.cached_reports(), 0);
    }

    #[test]
    fn test_cache_keys_include_censor_set() {
        let finder = finder("gmail.com\ngmx.de");
        let star = finder.report("g*x.de");
        let question = finder.report(CensoredPattern::new("g*x.de", CensorSet::from_parts(["?"])));
        assert_eq!(star.get("gmx.de"), Some(true));
        assert_eq!(question.get("gmx.de"), Some(false));
        assert_eq!(finder.cached_reports(), 2);
    }

    #[test]
    fn test_set_censoring_chars() {
        let mut finder = finder("gmail.com\ngmx.de");
        assert!(finder.find("g?x.de").is_empty());

        finder.report("g*x.de");
        finder.set_censoring_chars(["?", "#"]);
        assert_eq!(finder.cached_reports(), 0);
        assert_eq!(values(&finder.find("g?x.de")), vec!["gmx.de"]);
        assert_eq!(values(&finder.find("g#x.de")), vec!["gmx.de"]);
        assert!(finder.find("g*x.de").is_empty());

        finder.set_censoring_chars([""]);
        assert_eq!(finder.censor(), &CensorSet::default());
    }

    #[test]
    fn test_zero_cache_size_is_clamped() {
        let options = FinderOptions::new().with_cache_size(0);
        let finder = DomainFinder::loads("gmail.com", options).unwrap();
        finder.report("*****.***");
        finder.report("g****.***");
        assert_eq!(finder.cached_reports(), 1);
    }

    #[test]
    fn test_load_from_reader() {
        let finder =
            DomainFinder::load(r#"["aol.com","nodot"]"#.as_bytes(), FinderOptions::default())
                .unwrap();
        assert_eq!(finder.len(), 1);
        let values: Vec<&str> = finder.iter().map(Domain::as_str).collect();
        assert_eq!(values, vec!["aol.com"]);
    }

    #[test]
    fn test_iteration_matches_catalog() {
        let finder = finder("gmail.com\nyahoo.com");
        let via_ref: Vec<&Domain> = (&finder).into_iter().collect();
        assert_eq!(via_ref.len(), finder.len());
        assert!(!finder.is_empty());
    }

    #[test]
    fn test_find_default_catalog() {
        let found = find("g****.**m", ["*"]).unwrap();
        assert!(found.iter().any(|d| d.as_str() == "gmail.com"));
        assert!(found.iter().all(|d| d.len() == 9));
    }

    #[test]
    fn test_reports_from_rayon_pool() {
        use rayon::prelude::*;

        let text: Vec<String> = (0..2000).map(|i| format!("d{:04}.example.com", i)).collect();
        let finder = DomainFinder::loads(&text.join("\n"), FinderOptions::default()).unwrap();
        let queries: Vec<String> = (0..8).map(|i| format!("d***{}.example.com", i)).collect();

        let counts: Vec<(usize, usize)> = (0..256)
            .into_par_iter()
            .map(|i| {
                let report = finder.report(queries[i % queries.len()].as_str());
                (report.len(), report.matches().len())
            })
            .collect();

        assert!(counts.iter().all(|(total, matched)| *total == 2000 && *matched == 200));
        assert_eq!(finder.cached_reports(), queries.len());
    }
}
