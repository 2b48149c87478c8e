use super::{featured, published_in, related, sort_newest_first};
use crate::{
    content::{Article, Category, ContentError, ContentStore},
    i18n::{Locale, locale_from_path},
};

/// Locale-level queries over a content store.
///
/// Every call re-queries the store; store errors propagate unchanged.
#[derive(Debug, Clone)]
pub struct Library<S> {
    store: S,
}

impl<S: ContentStore> Library<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Published articles of `locale`, newest first.
    pub fn by_locale(&self, locale: Locale) -> Result<Vec<Article>, ContentError> {
        let mut articles = self.store.query(&published_in(locale))?;
        sort_newest_first(&mut articles);
        Ok(articles)
    }

    pub fn featured(&self, locale: Locale) -> Result<Option<Article>, ContentError> {
        Ok(featured(&self.by_locale(locale)?).cloned())
    }

    pub fn categories(&self, locale: Locale) -> Result<Vec<Category>, ContentError> {
        Ok(super::categories(&self.by_locale(locale)?))
    }

    pub fn tags(&self, locale: Locale) -> Result<Vec<String>, ContentError> {
        Ok(super::tags(&self.by_locale(locale)?))
    }

    /// Up to `limit` articles of the source's locale ranked by relevance.
    pub fn related(&self, source: &Article, limit: usize) -> Result<Vec<Article>, ContentError> {
        let articles = self.by_locale(source.locale())?;
        Ok(related(&articles, source, limit).into_iter().cloned().collect())
    }

    /// Published article `id` of `locale`.
    pub fn find(&self, locale: Locale, id: &str) -> Result<Option<Article>, ContentError> {
        let mut found = self
            .store
            .query(&|a: &Article| a.id == id && published_in(locale)(a))?;
        Ok(found.pop())
    }

    /// Published article behind a site path such as `/fr/articles/{id}`.
    ///
    /// Paths without a locale segment resolve in the default locale.
    pub fn find_by_path(&self, path: &str) -> Result<Option<Article>, ContentError> {
        let locale = locale_from_path(path);
        let Some(id) = path.trim_end_matches('/').rsplit('/').next().filter(|id| !id.is_empty())
        else {
            return Ok(None);
        };
        self.find(locale, id)
    }

    /// The published sibling of `article` in another locale, via `translation_slug`.
    pub fn translation_of(&self, article: &Article) -> Result<Option<Article>, ContentError> {
        let Some(slug) = article.meta.translation_slug.as_deref() else {
            return Ok(None);
        };
        let mut found = self.store.query(&|a: &Article| {
            a.id == slug && a.locale() != article.locale() && a.is_published()
        })?;
        Ok(found.pop())
    }

    /// Published articles of a series in `locale`, ordered by episode.
    pub fn series(&self, locale: Locale, series_id: &str) -> Result<Vec<Article>, ContentError> {
        let mut episodes = self.store.query(&|a: &Article| {
            published_in(locale)(a) && a.meta.series.as_ref().is_some_and(|s| s.id == series_id)
        })?;
        episodes.sort_by_key(|a| a.meta.series.as_ref().map(|s| s.episode));
        Ok(episodes)
    }
}
