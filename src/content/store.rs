//! Article stores.
//!
//! A [`ContentStore`] answers "which articles match this predicate". The site
//! build only ever reads from a store; articles are never modified.

use super::{ContentError, frontmatter::parse_article, types::Article};
use crate::{i18n::Locale, log};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Source extensions recognised as articles.
const ARTICLE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Read access to a collection of articles.
pub trait ContentStore {
    /// All articles for which `filter` returns true, in store order.
    fn query(&self, filter: &dyn Fn(&Article) -> bool) -> Result<Vec<Article>, ContentError>;
}

// ============================================================================
// MemoryStore
// ============================================================================

/// Store over an already-materialised list of articles.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl ContentStore for MemoryStore {
    fn query(&self, filter: &dyn Fn(&Article) -> bool) -> Result<Vec<Article>, ContentError> {
        Ok(self.articles.iter().filter(|a| filter(a)).cloned().collect())
    }
}

// ============================================================================
// DirStore
// ============================================================================

/// Store loaded once from a directory of `.md`/`.mdx` files.
///
/// Files are read in path order so that store order is deterministic.
#[derive(Debug, Clone)]
pub struct DirStore {
    inner: MemoryStore,
}

impl DirStore {
    /// Load and validate every article under `root`.
    pub fn open(root: &Path) -> Result<Self, ContentError> {
        let files = collect_article_files(root)?;

        let articles = files
            .par_iter()
            .map(|path| {
                let source =
                    fs::read_to_string(path).map_err(|err| ContentError::Io(path.clone(), err))?;
                parse_article(path, &source)
            })
            .collect::<Result<Vec<_>, _>>()?;

        check_unique_ids(&articles)?;
        log!("content"; "loaded {} articles from {}", articles.len(), root.display());

        Ok(Self {
            inner: MemoryStore::new(articles),
        })
    }
}

impl ContentStore for DirStore {
    fn query(&self, filter: &dyn Fn(&Article) -> bool) -> Result<Vec<Article>, ContentError> {
        self.inner.query(filter)
    }
}

/// Collect article source files under `root`, sorted by path.
fn collect_article_files(root: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|err| ContentError::Walk(root.to_path_buf(), err))?;
        let is_article = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| ARTICLE_EXTENSIONS.contains(&ext));
        if is_article {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Ids must be unique per locale; the same id may exist once in each locale.
fn check_unique_ids(articles: &[Article]) -> Result<(), ContentError> {
    let mut seen: FxHashSet<(Locale, &str)> = FxHashSet::default();
    for article in articles {
        if !seen.insert((article.locale(), article.id.as_str())) {
            return Err(ContentError::Duplicate {
                id: article.id.clone(),
                locale: article.locale(),
            });
        }
    }
    Ok(())
}
