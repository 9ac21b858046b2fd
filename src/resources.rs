//! Resource loaders: open a named resource path as a byte stream.
//!
//! A loader answers `Ok(None)` when it has no resource at the path and
//! reserves `Err` for paths it knows about but cannot open. Paths use `/`
//! separators and are always relative (e.g.
//! `META-INF/camel-main-configuration-metadata.json`).

use crate::config::ResolverConfig;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// Stream handed out by a loader; dropping it releases the underlying handle.
pub type ResourceStream<'a> = Box<dyn Read + Send + 'a>;

/// Strategy capable of opening resources by path.
pub trait ResourceLoader: Send + Sync {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Arc<T> {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        (**self).open(path)
    }
}

/// Loads resources from files under a directory root.
///
/// The root plays the role of a classpath directory entry. Lookups never
/// leave it: absolute paths, `..` segments and symlinks pointing outside the
/// root are all reported as absent.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &str) -> io::Result<Option<PathBuf>> {
        let relative = Path::new(path);
        if path.is_empty() || !is_plain_relative(relative) {
            trace!(path, "rejecting resource path outside loader root");
            return Ok(None);
        }

        let candidate = self.root.join(relative);
        if !candidate.is_file() {
            return Ok(None);
        }

        let root = fs::canonicalize(&self.root)?;
        let canonical = fs::canonicalize(&candidate)?;
        if !canonical.starts_with(&root) {
            trace!(
                path,
                target = %canonical.display(),
                "resource resolves outside loader root"
            );
            return Ok(None);
        }
        Ok(Some(canonical))
    }
}

fn is_plain_relative(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

impl ResourceLoader for DirectoryLoader {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        let Some(file_path) = self.locate(path)? else {
            return Ok(None);
        };
        let file = File::open(&file_path)?;
        Ok(Some(Box::new(BufReader::new(file))))
    }
}

/// In-memory resources keyed by path.
#[derive(Clone, Debug, Default)]
pub struct BundledLoader {
    entries: BTreeMap<String, Vec<u8>>,
}

impl BundledLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), contents.into());
    }

    pub fn with_resource(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLoader for BundledLoader {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        Ok(self
            .entries
            .get(path)
            .map(|bytes| Box::new(bytes.as_slice()) as ResourceStream<'_>))
    }
}

/// Ordered list of loaders consulted first-hit-wins.
#[derive(Clone, Default)]
pub struct SearchPath {
    loaders: Vec<Arc<dyn ResourceLoader>>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory loaders for each root, in the given order.
    pub fn from_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        dirs.into_iter().fold(Self::new(), |search, dir| {
            search.with(Arc::new(DirectoryLoader::new(dir)))
        })
    }

    pub fn push(&mut self, loader: Arc<dyn ResourceLoader>) {
        self.loaders.push(loader);
    }

    pub fn with(mut self, loader: Arc<dyn ResourceLoader>) -> Self {
        self.push(loader);
        self
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl std::fmt::Debug for SearchPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPath")
            .field("loaders", &self.loaders.len())
            .finish()
    }
}

impl ResourceLoader for SearchPath {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        let mut first_error = None;
        for (position, loader) in self.loaders.iter().enumerate() {
            match loader.open(path) {
                Ok(Some(stream)) => return Ok(Some(stream)),
                Ok(None) => {}
                Err(err) => {
                    debug!(path, position, error = %err, "search path entry failed to open resource");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}

static DEFAULT_LOADER: OnceLock<Arc<dyn ResourceLoader>> = OnceLock::new();

/// Process-wide fallback loader, built once from `ResolverConfig::from_env`.
pub fn default_loader() -> Arc<dyn ResourceLoader> {
    DEFAULT_LOADER
        .get_or_init(|| {
            let config = ResolverConfig::from_env();
            debug!(
                entries = config.search_path.len(),
                "initialized default resource search path"
            );
            Arc::new(config.loader())
        })
        .clone()
}
