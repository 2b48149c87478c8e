//! Article queries: locale filtering, featured pick, facets, counts, ranking.
//!
//! Everything here is a pure function over an article slice, except
//! [`Library`], which fetches a locale's articles from a [`ContentStore`]
//! and feeds them to those functions.
//!
//! [`ContentStore`]: crate::content::ContentStore

mod counts;
mod facets;
mod library;
mod related;

pub use counts::{category_counts, tag_counts};
pub use facets::{categories, tags};
pub use library::Library;
pub use related::{related, relatedness_score};

use crate::{content::Article, i18n::Locale};

/// Predicate selecting the published articles of `locale`.
pub fn published_in(locale: Locale) -> impl Fn(&Article) -> bool {
    move |article| article.locale() == locale && article.is_published()
}

/// Sort by date, most recent first. Equal dates keep their order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));
}

/// The first featured article, or the first (most recent) one.
pub fn featured(articles: &[Article]) -> Option<&Article> {
    articles
        .iter()
        .find(|a| a.meta.featured)
        .or_else(|| articles.first())
}

/// Canonical site path of an article: `/{locale}/articles/{id}`.
pub fn article_url(article: &Article) -> String {
    format!("/{}/articles/{}", article.locale(), article.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, fixtures::make_article};

    #[test]
    fn test_published_in() {
        let en = make_article("en", (2025, 1, 1), Category::Tutoriel, &[]);
        let mut fr = en.clone();
        fr.meta.lang = Locale::Fr;
        let mut draft = en.clone();
        draft.meta.draft = true;

        let pred = published_in(Locale::En);
        assert!(pred(&en));
        assert!(!pred(&fr));
        assert!(!pred(&draft));
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let mut articles = vec![
            make_article("old", (2025, 1, 1), Category::Tutoriel, &[]),
            make_article("tie-a", (2025, 2, 1), Category::Tutoriel, &[]),
            make_article("new", (2025, 3, 1), Category::Tutoriel, &[]),
            make_article("tie-b", (2025, 2, 1), Category::Tutoriel, &[]),
        ];
        sort_newest_first(&mut articles);
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "tie-a", "tie-b", "old"]);
    }

    #[test]
    fn test_featured_prefers_flag() {
        let mut articles = vec![
            make_article("a1", (2025, 3, 1), Category::Tutoriel, &[]),
            make_article("a2", (2025, 2, 1), Category::Tutoriel, &[]),
        ];
        articles[1].meta.featured = true;
        assert_eq!(featured(&articles).map(|a| a.id.as_str()), Some("a2"));
    }

    #[test]
    fn test_featured_falls_back_to_most_recent() {
        let articles = vec![
            make_article("a1", (2025, 3, 1), Category::Tutoriel, &[]),
            make_article("a2", (2025, 2, 1), Category::Tutoriel, &[]),
        ];
        assert_eq!(featured(&articles).map(|a| a.id.as_str()), Some("a1"));
        assert!(featured(&[]).is_none());
    }

    #[test]
    fn test_article_url() {
        let mut article = make_article("my-post", (2025, 1, 1), Category::Tutoriel, &[]);
        assert_eq!(article_url(&article), "/en/articles/my-post");

        article.id = "mon-article".into();
        article.meta.lang = Locale::Fr;
        assert_eq!(article_url(&article), "/fr/articles/mon-article");
    }
}
