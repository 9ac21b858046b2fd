//! Schema resolution by category and name.
//!
//! Catalog-backed categories are forwarded to the configured
//! `CatalogContext`. Model and main-configuration schemas are read straight
//! from resources through a three-tier chain: the explicit loader, then the
//! catalog context's class resolver, then the process-wide fallback. Every
//! public getter answers `Option<String>`; failures are traced, never
//! returned.

use crate::catalog::{CatalogContext, CatalogKind, SchemaCategory};
use crate::error::{ResolveError, ResolveResult};
use crate::resources::{ResourceLoader, ResourceStream, default_loader};
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resource holding the main configuration metadata.
pub const MAIN_CONFIGURATION_PATH: &str = "META-INF/camel-main-configuration-metadata.json";

/// Resource prefix under which model metadata is packaged.
pub const MODEL_DOCUMENTATION_PREFIX: &str = "META-INF/org/apache/camel/model/";

/// Model sub-namespaces in search priority order; the root comes first.
pub const MODEL_SUB_NAMESPACES: [&str; 10] = [
    "",
    "cloud/",
    "config/",
    "dataformat/",
    "errorhandler/",
    "language/",
    "loadbalancer/",
    "rest/",
    "transformer/",
    "validator/",
];

/// One strategy in the resource resolution chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoaderTier {
    /// Loader handed to the resolver at construction.
    Explicit,
    /// The catalog context's own class resolver.
    Context,
    /// Process-wide default loader.
    Fallback,
}

/// Order in which loader tiers are consulted for a resource path.
pub const RESOLUTION_ORDER: [LoaderTier; 3] =
    [LoaderTier::Explicit, LoaderTier::Context, LoaderTier::Fallback];

/// Lookup surface for JSON schema metadata.
///
/// `None` is ambiguous on purpose: the schema may be absent, or the lookup
/// may have failed.
pub trait JsonSchemaResolver {
    fn component_json_schema(&self, name: &str) -> Option<String>;
    fn data_format_json_schema(&self, name: &str) -> Option<String>;
    fn language_json_schema(&self, name: &str) -> Option<String>;
    fn transformer_json_schema(&self, name: &str) -> Option<String>;
    fn dev_console_json_schema(&self, name: &str) -> Option<String>;
    fn pojo_bean_json_schema(&self, name: &str) -> Option<String>;
    fn other_json_schema(&self, name: &str) -> Option<String>;
    fn model_json_schema(&self, name: &str) -> Option<String>;
    fn main_json_schema(&self) -> Option<String>;
}

/// Resolves schema documents against an optional catalog context and an
/// optional explicit resource loader.
///
/// Collaborators are fixed at construction. Nothing is cached: every call
/// re-reads through the current configuration.
#[derive(Clone)]
pub struct SchemaResolver {
    context: Option<Arc<dyn CatalogContext>>,
    loader: Option<Arc<dyn ResourceLoader>>,
    fallback: Arc<dyn ResourceLoader>,
}

/// Builder for `SchemaResolver`; every collaborator is optional.
#[derive(Clone, Default)]
pub struct SchemaResolverBuilder {
    context: Option<Arc<dyn CatalogContext>>,
    loader: Option<Arc<dyn ResourceLoader>>,
    fallback: Option<Arc<dyn ResourceLoader>>,
}

impl SchemaResolverBuilder {
    pub fn context(mut self, context: Arc<dyn CatalogContext>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn loader(mut self, loader: Arc<dyn ResourceLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Replace the process-wide default loader used as the last tier.
    pub fn fallback(mut self, fallback: Arc<dyn ResourceLoader>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn build(self) -> SchemaResolver {
        SchemaResolver {
            context: self.context,
            loader: self.loader,
            fallback: self.fallback.unwrap_or_else(default_loader),
        }
    }
}

impl Default for SchemaResolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for SchemaResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaResolver")
            .field("context", &self.context.is_some())
            .field("loader", &self.loader.is_some())
            .finish_non_exhaustive()
    }
}

impl SchemaResolver {
    pub fn builder() -> SchemaResolverBuilder {
        SchemaResolverBuilder::default()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }

    /// Resolve a schema, keeping failures distinct from absence.
    ///
    /// `Ok(None)` covers both a missing schema and a category whose backing
    /// collaborator is not configured. `name` is ignored for `Main`.
    pub fn resolve(&self, category: SchemaCategory, name: &str) -> ResolveResult<Option<String>> {
        match category {
            SchemaCategory::Other => Ok(None),
            SchemaCategory::Model => self.find_model_schema(name),
            SchemaCategory::Main => self.load_resource(MAIN_CONFIGURATION_PATH),
            delegated => match delegated.catalog_kind() {
                Some(kind) => self.catalog_lookup(kind, name),
                None => Ok(None),
            },
        }
    }

    /// `resolve` collapsed to the public contract.
    pub fn lookup(&self, category: SchemaCategory, name: &str) -> Option<String> {
        match self.resolve(category, name) {
            Ok(found) => found,
            Err(err) => {
                debug!(category = %category, name, error = %err, "schema lookup failed");
                None
            }
        }
    }

    /// Candidate resource paths for a model schema, in search order.
    pub fn model_candidate_paths(name: &str) -> Vec<String> {
        MODEL_SUB_NAMESPACES
            .iter()
            .map(|sub| format!("{MODEL_DOCUMENTATION_PREFIX}{sub}{name}.json"))
            .collect()
    }

    fn catalog_lookup(&self, kind: CatalogKind, name: &str) -> ResolveResult<Option<String>> {
        let Some(context) = &self.context else {
            trace!(kind = %kind, name, "no catalog context configured");
            return Ok(None);
        };
        context
            .parameter_json_schema(kind, name)
            .map_err(|source| ResolveError::Catalog {
                kind,
                name: name.to_string(),
                source,
            })
    }

    // First non-empty candidate wins; a failing candidate does not stop the
    // search, but is reported when nothing else is found.
    fn find_model_schema(&self, name: &str) -> ResolveResult<Option<String>> {
        let mut first_failure = None;
        for path in Self::model_candidate_paths(name) {
            match self.load_resource(&path) {
                Ok(Some(text)) if !text.is_empty() => return Ok(Some(text)),
                Ok(_) => trace!(path = %path, "model schema candidate not found"),
                Err(err) => {
                    debug!(path = %path, error = %err, "model schema candidate failed");
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
            }
        }
        match first_failure {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }

    fn tier_loader(&self, tier: LoaderTier) -> Option<&dyn ResourceLoader> {
        match tier {
            LoaderTier::Explicit => self.loader.as_deref(),
            LoaderTier::Context => self.context.as_deref().map(|context| context.class_resolver()),
            LoaderTier::Fallback => Some(self.fallback.as_ref()),
        }
    }

    /// Read a resource through the resolution chain.
    ///
    /// The first tier that opens a stream wins, even if reading it then
    /// fails. A tier whose open fails is skipped; its error is reported only
    /// when no later tier has the resource.
    pub fn load_resource(&self, path: &str) -> ResolveResult<Option<String>> {
        let mut open_failure = None;
        for tier in RESOLUTION_ORDER {
            let Some(loader) = self.tier_loader(tier) else {
                continue;
            };
            match loader.open(path) {
                Ok(Some(stream)) => {
                    trace!(path, ?tier, "resource resolved");
                    return read_text(path, stream).map(Some);
                }
                Ok(None) => trace!(path, ?tier, "resource not found"),
                Err(source) => {
                    debug!(path, ?tier, error = %source, "resource open failed");
                    if open_failure.is_none() {
                        open_failure = Some(ResolveError::Open {
                            path: path.to_string(),
                            source,
                        });
                    }
                }
            }
        }
        match open_failure {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}

// Consumes the stream so it is released whether or not the read succeeds.
fn read_text(path: &str, mut stream: ResourceStream<'_>) -> ResolveResult<String> {
    let mut text = String::new();
    stream
        .read_to_string(&mut text)
        .map_err(|source| ResolveError::Read {
            path: path.to_string(),
            source,
        })?;
    Ok(text)
}

impl JsonSchemaResolver for SchemaResolver {
    fn component_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::Component, name)
    }

    fn data_format_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::DataFormat, name)
    }

    fn language_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::Language, name)
    }

    fn transformer_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::Transformer, name)
    }

    fn dev_console_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::DevConsole, name)
    }

    fn pojo_bean_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::PojoBean, name)
    }

    fn other_json_schema(&self, _name: &str) -> Option<String> {
        None
    }

    fn model_json_schema(&self, name: &str) -> Option<String> {
        self.lookup(SchemaCategory::Model, name)
    }

    fn main_json_schema(&self) -> Option<String> {
        self.lookup(SchemaCategory::Main, "")
    }
}
