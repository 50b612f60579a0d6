//! Catalog of known candidate domains.

pub mod format;
pub mod loader;

pub use format::CatalogFormat;
pub use loader::{
    load_catalog_file, parse_catalog, parse_catalog_as, read_catalog, CatalogSource,
    EMBEDDED_DOMAINS,
};

use tracing::debug;

use crate::domain::Domain;
use crate::error::Result;

/// Ordered, immutable collection of candidate domains.
///
/// When built with `keep_only_valid`, every entry passed the domain validator
/// (or was given a forced validity of `true`).
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Domain>,
    keep_only_valid: bool,
}

impl Catalog {
    /// Build a catalog from entries, dropping invalid ones if requested.
    pub fn from_entries(entries: Vec<Domain>, keep_only_valid: bool) -> Self {
        let total = entries.len();
        let entries: Vec<Domain> = if keep_only_valid {
            entries.into_iter().filter(Domain::is_valid).collect()
        } else {
            entries
        };
        debug!(
            total,
            kept = entries.len(),
            keep_only_valid,
            "catalog entries filtered"
        );
        Self {
            entries,
            keep_only_valid,
        }
    }

    /// Load a catalog from a source.
    pub fn load(source: &CatalogSource, keep_only_valid: bool) -> Result<Self> {
        let entries = source.load()?;
        debug!(source = %source.describe(), entries = entries.len(), "catalog loaded");
        Ok(Self::from_entries(entries, keep_only_valid))
    }

    pub fn entries(&self) -> &[Domain] {
        &self.entries
    }

    pub fn keep_only_valid(&self) -> bool {
        self.keep_only_valid
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
