//! Error types for catalog construction.
//!
//! Resolution itself never fails: unknown ids and out-of-range inputs
//! degrade to `None` or empty lists. The only fallible step is loading
//! the reference tables, and every such failure is a `CatalogError`.

use crate::source::Domain;
use thiserror::Error;

/// Errors that can occur while building a [`Catalog`](crate::Catalog).
///
/// # Examples
///
/// ```rust
/// use railstat::{CatalogError, Domain};
///
/// let err = CatalogError::MissingSource {
///     domain: Domain::Relics,
///     location: "index/en/relics.json".to_string(),
/// };
/// assert_eq!(err.domain(), Domain::Relics);
/// assert!(err.to_string().contains("relics"));
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing data for a table could not be located.
    #[error("Missing source for table {domain}: {location}")]
    MissingSource { domain: Domain, location: String },

    /// The table exists but could not be read.
    #[error("Failed to read table {domain}: {source}")]
    Io {
        domain: Domain,
        #[source]
        source: std::io::Error,
    },

    /// The table content does not match the expected record shape.
    #[error("Malformed data in table {domain}: {source}")]
    Malformed {
        domain: Domain,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The reference domain whose table failed to load.
    pub fn domain(&self) -> Domain {
        match self {
            CatalogError::MissingSource { domain, .. }
            | CatalogError::Io { domain, .. }
            | CatalogError::Malformed { domain, .. } => *domain,
        }
    }
}
