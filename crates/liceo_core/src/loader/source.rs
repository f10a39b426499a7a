//! Static document sources.
//!
//! # Responsibility
//! - Resolve a site-relative path (`./data/news.json`) to document text.
//!
//! # Invariants
//! - Paths never escape the source root (`..` is rejected).

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use super::{LoadError, LoadResult};

/// Read-only access to the site's static documents.
pub trait DataSource {
    /// Returns the full text of the document at site-relative `path`.
    fn fetch(&self, path: &str) -> LoadResult<String>;
}

/// Documents served from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> LoadResult<PathBuf> {
        let mut resolved = self.root.clone();
        for component in Path::new(path.trim()).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir | Component::RootDir => {}
                Component::ParentDir | Component::Prefix(_) => {
                    return Err(LoadError::InvalidPath(path.to_string()));
                }
            }
        }
        if resolved == self.root {
            return Err(LoadError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }
}

impl DataSource for DirSource {
    fn fetch(&self, path: &str) -> LoadResult<String> {
        let resolved = self.resolve(path)?;
        std::fs::read_to_string(&resolved).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_string())
            } else {
                LoadError::Io {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }
}

/// Documents held in memory, keyed by normalized path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one document.
    pub fn with_document(mut self, path: &str, body: impl Into<String>) -> Self {
        self.documents.insert(normalize_key(path), body.into());
        self
    }
}

impl DataSource for MemorySource {
    fn fetch(&self, path: &str) -> LoadResult<String> {
        self.documents
            .get(&normalize_key(path))
            .cloned()
            .ok_or_else(|| LoadError::NotFound(path.to_string()))
    }
}

fn normalize_key(path: &str) -> String {
    path.trim()
        .trim_start_matches("./")
        .trim_start_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{DataSource, DirSource, MemorySource};
    use crate::loader::LoadError;

    #[test]
    fn dir_source_rejects_parent_components() {
        let source = DirSource::new("/srv/site");
        let err = source.fetch("../etc/passwd").unwrap_err();
        assert!(matches!(err, LoadError::InvalidPath(_)));
    }

    #[test]
    fn memory_source_ignores_leading_dot_slash() {
        let source = MemorySource::new().with_document("data/mural.json", "[]");
        assert_eq!(source.fetch("./data/mural.json").expect("normalized key should resolve"), "[]");
        assert!(matches!(
            source.fetch("data/news.json").unwrap_err(),
            LoadError::NotFound(_)
        ));
    }
}
