//! rss feed generation.
//!
//! One feed per locale, listing that locale's published articles newest first.

use crate::{
    config::SiteConfig,
    content::Article,
    i18n::{self, Locale},
    log,
    query::article_url,
};
use anyhow::{Context, Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, path::PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed of `locale` if enabled in config.
///
/// `articles` must already be the locale's published articles, newest first.
pub fn build_rss(config: &SiteConfig, locale: Locale, articles: &[Article]) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::new(config, locale, articles).write()?;
    }
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    locale: Locale,
    articles: &'a [Article],
}

impl<'a> RssFeed<'a> {
    fn new(config: &'a SiteConfig, locale: Locale, articles: &'a [Article]) -> Self {
        Self {
            config,
            locale,
            articles,
        }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .articles
            .iter()
            .map(|article| article_to_rss_item(article, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(self.config.base.url.as_deref().unwrap_or_default())
            .description(i18n::t(self.locale, "rss.description").unwrap_or_default())
            .language(self.locale.code().to_string())
            .generator("lectern".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed for `{}`: {e}", self.locale))?;
        Ok(channel.to_string())
    }

    /// Write rss feed to `{output}/{locale}/{rss.path}`
    fn write(self) -> Result<PathBuf> {
        let rss_path = self.config.rss_path(self.locale);
        let count = self.articles.len();
        let xml = self.into_xml()?;

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }
        fs::write(&rss_path, xml)
            .with_context(|| format!("failed to write `{}`", rss_path.display()))?;

        log!("rss"; "{} ({count} items)", rss_path.display());
        Ok(rss_path)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert an article to an rss item with an absolute permalink.
fn article_to_rss_item(article: &Article, config: &SiteConfig) -> rss::Item {
    let link = config.base.absolute_url(&article_url(article));

    ItemBuilder::default()
        .title(article.meta.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(article.meta.description.clone())
        .pub_date(article.meta.date.to_rfc2822())
        .build()
}
