use std::path::Path;

/// Catalog text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON array of domain strings
    Json,
    /// One domain per line
    Lines,
}

impl CatalogFormat {
    /// Detect format from file extension
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(CatalogFormat::Json),
            "txt" | "list" => Some(CatalogFormat::Lines),
            _ => None,
        }
    }

    /// Sniff format from content: JSON when the trimmed text opens an array.
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('[') {
            CatalogFormat::Json
        } else {
            CatalogFormat::Lines
        }
    }
}
