use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::Domain;
use crate::error::{CatalogErrorKind, FinderError, Result};

use super::format::CatalogFormat;

/// Bundled list of known email provider domains.
pub const EMBEDDED_DOMAINS: &str = include_str!("../../data/all_email_provider_domains.txt");

/// Where catalog entries come from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// The bundled email provider list
    Embedded,
    /// A catalog file (JSON array or one domain per line)
    File(PathBuf),
    /// Catalog text held in memory
    Text(String),
    /// Pre-built entries, possibly with forced validity
    Entries(Vec<Domain>),
}

impl CatalogSource {
    /// Read the source into unfiltered domain entries.
    pub fn load(&self) -> Result<Vec<Domain>> {
        match self {
            CatalogSource::Embedded => parse_catalog(EMBEDDED_DOMAINS),
            CatalogSource::File(path) => load_catalog_file(path),
            CatalogSource::Text(text) => parse_catalog(text),
            CatalogSource::Entries(entries) => {
                if entries.is_empty() {
                    return Err(FinderError::ConfigError(
                        "catalog entries must not be empty".to_string(),
                    ));
                }
                Ok(entries.clone())
            }
        }
    }

    /// Short description used in log lines.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Embedded => "embedded".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Text(_) => "text".to_string(),
            CatalogSource::Entries(_) => "entries".to_string(),
        }
    }
}

impl From<Vec<Domain>> for CatalogSource {
    fn from(entries: Vec<Domain>) -> Self {
        CatalogSource::Entries(entries)
    }
}

/// Parse catalog text, sniffing the format from its content.
///
/// Text whose trimmed content starts with `[` is read as a JSON array of
/// strings; anything else is read one domain per line.
pub fn parse_catalog(text: &str) -> Result<Vec<Domain>> {
    parse_catalog_as(text, CatalogFormat::sniff(text))
}

/// Parse catalog text in an explicit format.
pub fn parse_catalog_as(text: &str, format: CatalogFormat) -> Result<Vec<Domain>> {
    match format {
        CatalogFormat::Json => parse_json(text),
        CatalogFormat::Lines => Ok(parse_lines(text)),
    }
}

/// Read a whole catalog from a reader.
pub fn read_catalog(mut reader: impl Read) -> Result<Vec<Domain>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| {
        FinderError::catalog(
            CatalogErrorKind::FileError,
            format!("Failed to read catalog: {}", e),
        )
    })?;
    parse_catalog(&text)
}

/// Load a catalog file. A `.json` extension forces JSON parsing, other files
/// are sniffed.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<Domain>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        FinderError::catalog(
            CatalogErrorKind::FileError,
            format!("Failed to read catalog file '{}': {}", path.display(), e),
        )
    })?;
    match CatalogFormat::detect(path) {
        Some(CatalogFormat::Json) => parse_catalog_as(&text, CatalogFormat::Json),
        _ => parse_catalog(&text),
    }
}

fn parse_lines(text: &str) -> Vec<Domain> {
    // Blank lines are kept as empty (invalid) entries.
    text.split('\n').map(|line| Domain::new(line.trim())).collect()
}

fn parse_json(text: &str) -> Result<Vec<Domain>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text).map_err(|e| {
        FinderError::catalog(
            CatalogErrorKind::InvalidData,
            format!("Invalid JSON catalog: {}", e),
        )
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| match value {
            serde_json::Value::String(s) => Ok(Domain::new(s)),
            other => Err(FinderError::catalog(
                CatalogErrorKind::InvalidData,
                format!("Catalog element {} is not a string: {}", idx, other),
            )),
        })
        .collect()
}
