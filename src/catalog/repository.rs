//! Holds parameter schemas by catalog kind and name.
//!
//! The repository is the in-process `CatalogContext`: schemas are registered
//! directly or loaded from a JSON catalog file, and an optional resource
//! loader stands in for the runtime's own class resolver.

use crate::catalog::context::CatalogContext;
use crate::catalog::identity::CatalogKind;
use crate::resources::{ResourceLoader, SearchPath};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory catalog context keyed by `(CatalogKind, name)`.
#[derive(Clone)]
pub struct CatalogRepository {
    schemas: BTreeMap<CatalogKind, BTreeMap<String, String>>,
    resources: Arc<dyn ResourceLoader>,
}

impl Default for CatalogRepository {
    fn default() -> Self {
        Self {
            schemas: BTreeMap::new(),
            resources: Arc::new(SearchPath::new()),
        }
    }
}

impl std::fmt::Debug for CatalogRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogRepository")
            .field("schemas", &self.len())
            .finish_non_exhaustive()
    }
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema for later lookup, replacing any previous entry.
    pub fn register(&mut self, kind: CatalogKind, name: impl Into<String>, schema: impl Into<String>) {
        self.schemas
            .entry(kind)
            .or_default()
            .insert(name.into(), schema.into());
    }

    pub fn with_schema(
        mut self,
        kind: CatalogKind,
        name: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        self.register(kind, name, schema);
        self
    }

    /// Use `loader` as this catalog's class resolver.
    pub fn with_resources(mut self, loader: Arc<dyn ResourceLoader>) -> Self {
        self.resources = loader;
        self
    }

    /// Fetch a schema by kind and name, if present.
    pub fn get(&self, kind: CatalogKind, name: &str) -> Option<&str> {
        self.schemas.get(&kind)?.get(name).map(String::as_str)
    }

    /// Names registered for `kind`, in stable order.
    pub fn names(&self, kind: CatalogKind) -> impl Iterator<Item = &str> {
        self.schemas
            .get(&kind)
            .into_iter()
            .flat_map(|by_name| by_name.keys().map(String::as_str))
    }

    /// Total number of registered schemas across all kinds.
    pub fn len(&self) -> usize {
        self.schemas.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CatalogContext for CatalogRepository {
    fn parameter_json_schema(&self, kind: CatalogKind, name: &str) -> io::Result<Option<String>> {
        Ok(self.get(kind, name).map(str::to_string))
    }

    fn class_resolver(&self) -> &dyn ResourceLoader {
        self.resources.as_ref()
    }
}

/// On-disk catalog layout: one object per kind mapping names to schemas,
/// plus optional resource directories relative to the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    resource_dirs: Vec<PathBuf>,
    #[serde(flatten)]
    schemas: BTreeMap<CatalogKind, BTreeMap<String, Value>>,
}

/// Read a catalog file and build a repository from it.
///
/// Schema values given as JSON strings are kept verbatim; any other JSON
/// value is stored as its compact serialization.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogRepository> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let resource_dirs = file
        .resource_dirs
        .iter()
        .map(|dir| if dir.is_absolute() { dir.clone() } else { base.join(dir) });

    let mut repository = CatalogRepository::new()
        .with_resources(Arc::new(SearchPath::from_dirs(resource_dirs)));
    for (kind, by_name) in file.schemas {
        for (name, value) in by_name {
            let text = match value {
                Value::String(text) => text,
                other => serde_json::to_string(&other)
                    .with_context(|| format!("encoding {kind} schema '{name}'"))?,
            };
            repository.register(kind, name, text);
        }
    }
    Ok(repository)
}

impl CatalogRepository {
    /// Load a repository from a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        load_catalog_from_path(path)
    }
}
