use anyhow::{Context, Result};
use schema_resolver::{
    CatalogContext, CatalogKind, ResourceLoader, ResourceStream, SchemaResolver,
    SchemaResolverBuilder, SearchPath,
};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Builder whose last tier resolves nothing, independent of the environment.
pub fn isolated_resolver() -> SchemaResolverBuilder {
    SchemaResolver::builder().fallback(Arc::new(SearchPath::new()))
}

/// Write `contents` at `relative` under `root`, creating parent directories.
pub fn write_resource(root: &Path, relative: &str, contents: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
}

pub fn resource_tree(entries: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new().context("allocating resource dir")?;
    for (relative, contents) in entries {
        write_resource(dir.path(), relative, contents)?;
    }
    Ok(dir)
}

/// Catalog context whose every lookup fails with an I/O error.
pub struct FailingCatalog {
    resources: SearchPath,
}

impl FailingCatalog {
    pub fn new() -> Self {
        Self {
            resources: SearchPath::new(),
        }
    }
}

impl CatalogContext for FailingCatalog {
    fn parameter_json_schema(&self, kind: CatalogKind, name: &str) -> io::Result<Option<String>> {
        Err(io::Error::other(format!("catalog unavailable for {kind} {name}")))
    }

    fn class_resolver(&self) -> &dyn ResourceLoader {
        &self.resources
    }
}

/// Loader that records every path it is asked for and resolves none.
#[derive(Default)]
pub struct RecordingLoader {
    requested: Mutex<Vec<String>>,
}

impl RecordingLoader {
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }
}

impl ResourceLoader for RecordingLoader {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        self.requested
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push(path.to_string());
        Ok(None)
    }
}

/// Loader whose every open fails.
pub struct BrokenLoader;

impl ResourceLoader for BrokenLoader {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("cannot open {path}"),
        ))
    }
}
