//! Error types for schema resolution.
//!
//! These never cross the `JsonSchemaResolver` getters; they exist so the
//! explicit `SchemaResolver::resolve` form can tell a genuinely absent schema
//! apart from a lookup that failed.

use crate::catalog::CatalogKind;
use std::io;
use thiserror::Error;

/// Result type for resolution steps.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Failures that can occur while resolving a schema document.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The catalog context raised an I/O error for a parameter schema lookup.
    #[error("catalog lookup for {kind} '{name}' failed: {source}")]
    Catalog {
        kind: CatalogKind,
        name: String,
        #[source]
        source: io::Error,
    },

    /// A loader failed to open a resource stream.
    #[error("opening resource {path} failed: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A resource stream was opened but could not be read as UTF-8 text.
    #[error("reading resource {path} failed: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    /// Resource path involved in the failure, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            ResolveError::Catalog { .. } => None,
            ResolveError::Open { path, .. } | ResolveError::Read { path, .. } => Some(path),
        }
    }
}
