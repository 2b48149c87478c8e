use crate::content::Article;

/// Points for sharing the source's category.
const CATEGORY_SCORE: u32 = 2;
/// Points per shared tag. Not capped, not normalised by tag count.
const TAG_SCORE: u32 = 1;

/// Relevance of `candidate` to `source`.
pub fn relatedness_score(source: &Article, candidate: &Article) -> u32 {
    let category = if candidate.meta.category == source.meta.category {
        CATEGORY_SCORE
    } else {
        0
    };
    let shared_tags = candidate
        .meta
        .tags
        .iter()
        .filter(|tag| source.has_tag(tag))
        .count() as u32;

    category + shared_tags * TAG_SCORE
}

/// Up to `limit` articles from `articles` ranked by relevance to `source`.
///
/// `articles` is expected newest first; equal scores keep that order. The
/// source itself (same id) is never returned. Zero scores are still ranked.
pub fn related<'a>(articles: &'a [Article], source: &Article, limit: usize) -> Vec<&'a Article> {
    let mut scored: Vec<(u32, &Article)> = articles
        .iter()
        .filter(|candidate| candidate.id != source.id)
        .map(|candidate| (relatedness_score(source, candidate), candidate))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, a)| a).collect()
}
