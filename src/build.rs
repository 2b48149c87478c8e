//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     └── per locale (rayon) ──► Library::by_locale()
//!                                     │
//!                                     ├── build_rss()    ──► {output}/{locale}/rss.xml
//!                                     └── build_index()  ──► {output}/{locale}/articles.json
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    generator::{index::build_index, rss::build_rss},
    i18n::Locale,
    log,
    query::Library,
};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Write the outputs of every locale, locales in parallel.
///
/// Returns the number of published articles across all locales.
pub fn build_site<S: ContentStore + Sync>(config: &SiteConfig, library: &Library<S>) -> Result<usize> {
    let counts = Locale::ALL
        .par_iter()
        .map(|&locale| build_locale(config, library, locale))
        .collect::<Result<Vec<_>>>()?;

    let total = counts.iter().sum();
    log!("build"; "{total} articles in {} locales", Locale::ALL.len());
    Ok(total)
}

fn build_locale<S: ContentStore + Sync>(
    config: &SiteConfig,
    library: &Library<S>,
    locale: Locale,
) -> Result<usize> {
    let articles = library
        .by_locale(locale)
        .with_context(|| format!("failed to load `{locale}` articles"))?;

    let (rss_result, index_result) = rayon::join(
        || build_rss(config, locale, &articles),
        || build_index(config, library, locale, &articles),
    );
    rss_result?;
    index_result?;

    Ok(articles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, MemoryStore, fixtures::make_article};
    use tempfile::TempDir;

    #[test]
    fn test_build_site_writes_every_locale() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com".into());
        config.build.output = dir.path().to_path_buf();

        let en = make_article("hello", (2025, 3, 15), Category::Tutoriel, &["rust"]);
        let mut fr = make_article("bonjour", (2025, 3, 16), Category::Tutoriel, &["rust"]);
        fr.meta.lang = Locale::Fr;
        let mut draft = make_article("draft", (2025, 3, 17), Category::Tutoriel, &[]);
        draft.meta.draft = true;
        let library = Library::new(MemoryStore::new(vec![en, fr, draft]));

        assert_eq!(build_site(&config, &library).unwrap(), 2);
        for locale in ["en", "fr"] {
            assert!(dir.path().join(locale).join("rss.xml").is_file());
            assert!(dir.path().join(locale).join("articles.json").is_file());
        }
        let fr_feed = std::fs::read_to_string(dir.path().join("fr/rss.xml")).unwrap();
        assert!(fr_feed.contains("/fr/articles/bonjour"));
        assert!(!fr_feed.contains("hello"));
    }

    #[test]
    fn test_build_site_empty_locale() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com".into());
        config.build.output = dir.path().to_path_buf();
        config.build.index.enable = false;

        let library = Library::new(MemoryStore::default());
        assert_eq!(build_site(&config, &library).unwrap(), 0);
        assert!(dir.path().join("en/rss.xml").is_file());
        assert!(!dir.path().join("en/articles.json").exists());
    }
}
