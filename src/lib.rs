//! Schema metadata resolution for an integration runtime.
//!
//! The crate answers "what is the JSON schema for component/data format/
//! language/... `name`?" by delegating to a host catalog context, and answers
//! model and main-configuration questions by reading packaged resources
//! through an ordered loader chain. Public lookups never fail: they return
//! the document text or `None`. `SchemaResolver::resolve` is the explicit
//! form for callers (and tests) that need to see why nothing came back.

pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;
pub mod resources;

pub use catalog::{
    CatalogContext, CatalogKind, CatalogRepository, SchemaCategory, load_catalog_from_path,
};
pub use config::{ResolverConfig, SEARCH_PATH_ENV};
pub use error::{ResolveError, ResolveResult};
pub use resolver::{
    JsonSchemaResolver, LoaderTier, MAIN_CONFIGURATION_PATH, MODEL_DOCUMENTATION_PREFIX,
    MODEL_SUB_NAMESPACES, RESOLUTION_ORDER, SchemaResolver, SchemaResolverBuilder,
};
pub use resources::{
    BundledLoader, DirectoryLoader, ResourceLoader, ResourceStream, SearchPath, default_loader,
};
