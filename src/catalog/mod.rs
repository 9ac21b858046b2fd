//! Catalog context wiring.
//!
//! A catalog context is the host runtime's view of the components, data
//! formats, languages, transformers, dev consoles, beans and EIPs it knows
//! about, together with their parameter schemas. `CatalogRepository` is the
//! in-process implementation, optionally loaded from a JSON catalog file.

pub mod context;
pub mod identity;
pub mod repository;

pub use context::CatalogContext;
pub use identity::{CatalogKind, SchemaCategory};
pub use repository::{CatalogRepository, load_catalog_from_path};
