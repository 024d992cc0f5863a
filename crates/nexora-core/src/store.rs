//! Store — the read-only, in-memory collection of [`Article`] values.
//!
//! The store is built once at startup, either from the embedded sample
//! articles ([`ArticleStore::builtin`]) or from a TOML file with the same
//! `[[articles]]` layout ([`ArticleStore::load`]). After construction there is
//! no way to add, remove, or edit an article.

use crate::error::StoreError;
use crate::types::Article;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_ARTICLES: &str = include_str!("articles.toml");

#[derive(Debug, Deserialize)]
struct RawStore {
    #[serde(default)]
    articles: Vec<Article>,
}

/// Immutable article collection with an id index.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
    by_id: HashMap<String, usize>,
}

impl ArticleStore {
    /// Build a store from already-constructed articles.
    ///
    /// Fails if any id is empty or repeated, or any read time is zero.
    pub fn new(articles: Vec<Article>) -> Result<Self, StoreError> {
        let mut by_id = HashMap::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            if article.id.is_empty() {
                return Err(StoreError::EmptyId { index });
            }
            if article.read_time == 0 {
                return Err(StoreError::ZeroReadTime(article.id.clone()));
            }
            if by_id.insert(article.id.clone(), index).is_some() {
                return Err(StoreError::DuplicateId(article.id.clone()));
            }
        }
        tracing::debug!(count = articles.len(), "article store built");
        Ok(Self { articles, by_id })
    }

    /// The embedded sample articles.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. It ships with the binary and
    /// is covered by the tests below.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_ARTICLES).expect("embedded article store must be valid")
    }

    /// Parse a store from TOML text containing `[[articles]]` tables.
    pub fn from_toml_str(src: &str) -> Result<Self, StoreError> {
        let raw: RawStore = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::new(raw.articles)
    }

    /// Read and parse a store file from disk.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let src = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// All articles in authoring order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.by_id.get(id).map(|&i| &self.articles[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
