//! Article builders shared by unit tests.

use super::{Article, ArticleMeta, Category, PillarTag};
use crate::{i18n::Locale, utils::date::DateTimeUtc};
use proptest::prelude::*;

/// A published, non-featured `en` article.
pub fn make_article(id: &str, date: (u16, u8, u8), category: Category, tags: &[&str]) -> Article {
    Article::new(
        id,
        ArticleMeta {
            title: format!("Title of {id}"),
            description: "A test article".into(),
            date: DateTimeUtc::from_ymd(date.0, date.1, date.2),
            category,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            pillar_tags: vec![PillarTag::Engineering],
            image: None,
            reading_time: 5,
            featured: false,
            draft: false,
            lang: Locale::En,
            translation_slug: None,
            series: None,
        },
    )
}

const TAG_POOL: &[&str] = &["rust", "css", "node", "typescript", "ai", "ux"];

/// Random article lists over a small tag pool, so overlaps are common.
pub fn arb_articles() -> impl Strategy<Value = Vec<Article>> {
    let one = (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        (2020u16..2027, 1u8..=12, 1u8..=28),
        0usize..Category::ALL.len(),
        proptest::sample::subsequence(TAG_POOL.to_vec(), 0..=TAG_POOL.len()),
    );
    proptest::collection::vec(one, 0..24).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (is_fr, draft, featured, date, cat, tags))| {
                let mut article = make_article(&format!("a{i}"), date, Category::ALL[cat], &tags);
                article.meta.lang = if is_fr { Locale::Fr } else { Locale::En };
                article.meta.draft = draft;
                article.meta.featured = featured;
                article
            })
            .collect()
    })
}
