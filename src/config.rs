//! Environment-driven configuration for the process-wide fallback loader.
//!
//! The fallback search path is read from `SCHEMA_RESOLVER_PATH` (same list
//! syntax as `PATH`). When the variable is unset or names no usable
//! directory, the build-time hint baked by `build.rs` is used instead.

use crate::resources::SearchPath;
use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable holding the default resource search path.
pub const SEARCH_PATH_ENV: &str = "SCHEMA_RESOLVER_PATH";

/// Configuration for the default resource loader.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolverConfig {
    /// Directory roots consulted in order, first hit wins.
    pub search_path: Vec<PathBuf>,
}

impl ResolverConfig {
    /// Read the search path from the environment, then the build-time hint.
    pub fn from_env() -> Self {
        if let Some(raw) = env::var_os(SEARCH_PATH_ENV) {
            let search_path = parse_search_path(&raw);
            if !search_path.is_empty() {
                return Self { search_path };
            }
        }

        if let Some(hint) = option_env!("SCHEMA_RESOLVER_PATH_HINT") {
            return Self {
                search_path: parse_search_path(OsStr::new(hint)),
            };
        }

        Self::default()
    }

    pub fn with_search_path<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_path: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a search path of directory loaders in configured order.
    pub fn loader(&self) -> SearchPath {
        SearchPath::from_dirs(self.search_path.iter().cloned())
    }
}

/// Split a platform path list, keeping only entries that are directories.
pub fn parse_search_path(raw: &OsStr) -> Vec<PathBuf> {
    env::split_paths(raw)
        .filter(|entry| !entry.as_os_str().is_empty() && entry.is_dir())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_keeps_existing_directories_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let missing = first.path().join("missing");
        let joined = env::join_paths([
            second.path().to_path_buf(),
            missing,
            first.path().to_path_buf(),
        ])
        .unwrap();

        let parsed = parse_search_path(&joined);
        assert_eq!(
            parsed,
            vec![second.path().to_path_buf(), first.path().to_path_buf()]
        );
    }

    #[test]
    fn parse_ignores_files_and_empty_entries() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let joined = env::join_paths([file, PathBuf::new()]).unwrap();
        assert!(parse_search_path(&joined).is_empty());
    }

    #[test]
    fn loader_follows_search_path_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(first.path().join("a.json"), "first").unwrap();
        std::fs::write(second.path().join("a.json"), "second").unwrap();

        let config = ResolverConfig::with_search_path([second.path(), first.path()]);
        let loader = config.loader();
        assert_eq!(loader.len(), 2);

        let mut text = String::new();
        let mut stream = crate::ResourceLoader::open(&loader, "a.json")
            .unwrap()
            .expect("resource present");
        std::io::Read::read_to_string(&mut stream, &mut text).unwrap();
        assert_eq!(text, "second");
    }
}
