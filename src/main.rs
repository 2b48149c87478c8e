//! lectern - content layer of a bilingual static blog.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod i18n;
mod query;
mod share;
mod utils;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{Article, DirStore};
use generator::index::ArticleEntry;
use i18n::{Locale, category_label, format_date};
use query::{Library, article_url, category_counts, tag_counts};
use share::ShareLinks;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let store = DirStore::open(&config.build.content)?;
    let library = Library::new(store);

    match &cli.command {
        Commands::Build { .. } => build_site(&config, &library).map(|_| ()),
        Commands::List { locale } => list(&library, *locale),
        Commands::Related { locale, id, limit } => {
            let limit = limit.unwrap_or(config.build.related_limit);
            related(&library, *locale, id, limit)
        }
        Commands::Facets { locale } => facets(&library, *locale),
        Commands::Show { path } => show(&config, &library, path),
        Commands::Share { locale, id } => share(&config, &library, *locale, id),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    if !config.config_path.exists() {
        bail!("Config file not found: `{}`", config.config_path.display());
    }

    // Outputs only matter when building
    if !cli.is_build() {
        config.build.rss.enable = false;
        config.build.index.enable = false;
    }
    config.validate()?;

    Ok(config)
}

fn find_article(library: &Library<DirStore>, locale: Locale, id: &str) -> Result<Article> {
    library
        .find(locale, id)?
        .with_context(|| format!("no published `{locale}` article with id `{id}`"))
}

fn list(library: &Library<DirStore>, locale: Locale) -> Result<()> {
    let featured = library.featured(locale)?.map(|a| a.id);
    for article in library.by_locale(locale)? {
        let marker = if featured.as_deref() == Some(article.id.as_str()) { "*" } else { " " };
        println!(
            "{marker} {:<40} {:<14} {}",
            article.id,
            format_date(article.meta.date, locale.code()),
            article.meta.title
        );
    }
    Ok(())
}

fn related(library: &Library<DirStore>, locale: Locale, id: &str, limit: usize) -> Result<()> {
    let source = find_article(library, locale, id)?;
    for article in library.related(&source, limit)? {
        let score = query::relatedness_score(&source, &article);
        println!("{score:>3}  {}  {}", article.id, article.meta.title);
    }
    Ok(())
}

fn facets(library: &Library<DirStore>, locale: Locale) -> Result<()> {
    let articles = library.by_locale(locale)?;

    let categories = library.categories(locale)?;
    println!("categories:");
    for (category, count) in category_counts(&articles, &categories) {
        println!("  {:<26} {count:>3}  {}", category.as_str(), category_label(category, locale));
    }

    let tags = library.tags(locale)?;
    println!("tags:");
    for (tag, count) in tag_counts(&articles, &tags) {
        println!("  {tag:<26} {count:>3}");
    }
    Ok(())
}

fn show(config: &SiteConfig, library: &Library<DirStore>, path: &str) -> Result<()> {
    let article = library
        .find_by_path(path)?
        .with_context(|| format!("no published article at `{path}`"))?;
    let locale_articles = library.by_locale(article.locale())?;
    let entry = ArticleEntry::new(config, library, &article, &locale_articles)?;

    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

fn share(config: &SiteConfig, library: &Library<DirStore>, locale: Locale, id: &str) -> Result<()> {
    if config.base.url.is_none() {
        bail!("[base.url] is required to build share links");
    }
    let article = find_article(library, locale, id)?;
    let url = config.base.absolute_url(&article_url(&article));
    let links = ShareLinks::new(&article.meta.title, &url);

    println!("{}", serde_json::to_string_pretty(&links)?);
    Ok(())
}
