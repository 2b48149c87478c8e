//! JSON article index, one per locale, for the templating layer.
//!
//! Written to `{output}/{locale}/articles.json`:
//!
//! ```json
//! {
//!   "locale": "en",
//!   "featured": "my-post",
//!   "categories": [{ "slug": "tutoriel", "label": "Tutorial", "count": 2 }],
//!   "tags": [{ "name": "rust", "count": 1 }],
//!   "articles": [{ "id": "my-post", "url": "/en/articles/my-post", ... }]
//! }
//! ```

use crate::{
    config::SiteConfig,
    content::{Article, Category, ContentStore, PillarTag, Series},
    i18n::{self, Locale},
    log,
    query::{self, Library, article_url},
    share::ShareLinks,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::PathBuf};

/// Index of one locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleIndex {
    pub locale: Locale,

    /// Id of the spotlight article
    pub featured: Option<String>,

    /// Categories in use, canonical order
    pub categories: Vec<CategoryFacet>,

    /// Tags in use, alphabetical order
    pub tags: Vec<TagFacet>,

    /// Published articles, newest first
    pub articles: Vec<ArticleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub slug: Category,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFacet {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarBadge {
    pub name: PillarTag,
    pub class: &'static str,
}

/// Link to the same article in the other locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationLink {
    pub locale: Locale,
    pub url: String,
    /// Language switcher text, in the article's own locale
    pub label: String,
}

/// One episode of the series an article belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPart {
    pub id: String,
    pub episode: u32,
    pub title: String,
    pub url: String,
}

/// One article as seen by templates.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub date: DateTimeUtc,
    /// Date in the locale's display format
    pub formatted_date: String,
    pub category: Category,
    pub category_label: &'static str,
    pub tags: Vec<String>,
    pub pillar_tags: Vec<PillarBadge>,
    pub reading_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    /// Published episodes of the series, in episode order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series_parts: Vec<SeriesPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationLink>,
    /// Ids of related articles, most relevant first
    pub related: Vec<String>,
    pub share: ShareLinks,
}

impl LocaleIndex {
    /// Build the index from the locale's published articles (newest first).
    pub fn build<S: ContentStore>(
        config: &SiteConfig,
        library: &Library<S>,
        locale: Locale,
        articles: &[Article],
    ) -> Result<Self> {
        let used_categories = query::categories(articles);
        let category_counts = query::category_counts(articles, &used_categories);
        let categories = used_categories
            .iter()
            .map(|&slug| CategoryFacet {
                slug,
                label: i18n::category_label(slug, locale),
                count: category_counts.get(&slug).copied().unwrap_or_default(),
            })
            .collect();

        let used_tags = query::tags(articles);
        let tag_counts = query::tag_counts(articles, &used_tags);
        let tags = used_tags
            .into_iter()
            .map(|name| {
                let count = tag_counts.get(&name).copied().unwrap_or_default();
                TagFacet { name, count }
            })
            .collect();

        let entries = articles
            .iter()
            .map(|article| ArticleEntry::new(config, library, article, articles))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            locale,
            featured: query::featured(articles).map(|a| a.id.clone()),
            categories,
            tags,
            articles: entries,
        })
    }

    /// Write the index to `{output}/{locale}/{index.path}`.
    pub fn write(&self, config: &SiteConfig) -> Result<PathBuf> {
        let path = config.index_path(self.locale);
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }
        fs::write(&path, json).with_context(|| format!("failed to write `{}`", path.display()))?;

        log!("index"; "{} ({} articles)", path.display(), self.articles.len());
        Ok(path)
    }
}

impl ArticleEntry {
    /// Entry of `article`; `locale_articles` are the published articles of
    /// its locale, newest first.
    pub fn new<S: ContentStore>(
        config: &SiteConfig,
        library: &Library<S>,
        article: &Article,
        locale_articles: &[Article],
    ) -> Result<Self> {
        let meta = &article.meta;
        let translation = library
            .translation_of(article)?
            .map(|sibling| TranslationLink::new(article.locale(), &sibling));
        let series_parts = match &meta.series {
            Some(series) => library
                .series(article.locale(), &series.id)?
                .iter()
                .map(SeriesPart::new)
                .collect(),
            None => Vec::new(),
        };
        let url = article_url(article);
        let share = ShareLinks::new(&meta.title, &config.base.absolute_url(&url));
        let related = query::related(locale_articles, article, config.build.related_limit)
            .into_iter()
            .map(|a| a.id.clone())
            .collect();

        Ok(Self {
            id: article.id.clone(),
            url,
            title: meta.title.clone(),
            description: meta.description.clone(),
            date: meta.date,
            formatted_date: i18n::format_date(meta.date, article.locale().code()),
            category: meta.category,
            category_label: i18n::category_label(meta.category, article.locale()),
            tags: meta.tags.clone(),
            pillar_tags: meta
                .pillar_tags
                .iter()
                .map(|&name| PillarBadge {
                    name,
                    class: name.style_class(),
                })
                .collect(),
            reading_time: meta.reading_time,
            image: meta.image.clone(),
            series: meta.series.clone(),
            series_parts,
            translation,
            related,
            share,
        })
    }
}

impl TranslationLink {
    /// Link from an article in `from` to its translation `sibling`.
    fn new(from: Locale, sibling: &Article) -> Self {
        let target = sibling.locale();
        let label = i18n::t(from, "lang.switch")
            .unwrap_or("{label}")
            .replace("{label}", target.label());
        Self {
            locale: target,
            url: article_url(sibling),
            label,
        }
    }
}

impl SeriesPart {
    fn new(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            episode: article.meta.series.as_ref().map_or(0, |s| s.episode),
            title: article.meta.title.clone(),
            url: article_url(article),
        }
    }
}

/// Build and write the index of `locale` if enabled in config.
pub fn build_index<S: ContentStore>(
    config: &SiteConfig,
    library: &Library<S>,
    locale: Locale,
    articles: &[Article],
) -> Result<()> {
    if config.build.index.enable {
        LocaleIndex::build(config, library, locale, articles)?.write(config)?;
    }
    Ok(())
}
