//! EMDOFI - uncover a censored email domain
//!
//! Given a partially censored domain such as `g****.**m` (or a whole email
//! address like `j***@g****.**m`), this library reports every known domain
//! whose visible characters agree position by position:
//! - Censoring alphabets normalized to single characters
//! - Domain validation against a label grammar
//! - Positional scheme comparison, run in parallel over the catalog
//! - Catalogs from the bundled provider list, files, text or JSON arrays
//! - LRU caching of full match reports
//!
//! # Example
//!
//! ```rust
//! use emdofi::{CatalogSource, DomainFinder, FinderOptions};
//!
//! let source = CatalogSource::Text(r#"["gmail.com", "gmial.com", "yahoo.com"]"#.to_string());
//! let finder = DomainFinder::new(Some(source), FinderOptions::new().with_censoring_chars(["*?"]))
//!     .unwrap();
//!
//! // Matching domains only
//! let found: Vec<String> = finder.find("john@g??**.**m").iter().map(|d| d.to_string()).collect();
//! assert_eq!(found, vec!["gmail.com", "gmial.com"]);
//!
//! // Every catalog entry with its outcome
//! let report = finder.report("g****.**m");
//! assert_eq!(report.len(), 3);
//! assert_eq!(report.get("yahoo.com"), Some(false));
//! ```
//!
//! # Matching Rules
//!
//! | Pattern | Candidate | Result | Why |
//! |---------|-----------|--------|-----|
//! | `g****.**m` | `gmail.com` | match | `g`, `.` and `m` agree |
//! | `g****.**m` | `yahoo.com` | no match | position 0 differs |
//! | `g****.**m` | `gmail.co` | no match | lengths differ |
//! | `******` | `gmx.de` | match | fully censored, same length |

pub mod catalog;
pub mod censor;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod finder;
pub mod matcher;
pub mod output;
pub mod scheme;
pub mod types;

// Re-export commonly used items
pub use catalog::{Catalog, CatalogFormat, CatalogSource};
pub use censor::{strip_local_part, CensorSet, CensoredPattern, DEFAULT_CENSORING_CHAR};
pub use domain::{is_valid_domain, Domain};
pub use error::{CatalogErrorKind, FinderError, Result};
pub use finder::{find, DomainFinder, FinderOptions, DEFAULT_CACHE_SIZE};
pub use matcher::{match_domains, report};
pub use scheme::Scheme;
pub use types::{MatchOutcome, MatchReport, Query};
