use crate::content::{Article, Category};
use std::collections::BTreeSet;

/// Distinct categories in use, in canonical order.
pub fn categories(articles: &[Article]) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| articles.iter().any(|a| a.meta.category == *category))
        .collect()
}

/// Distinct tags in use, sorted alphabetically.
pub fn tags(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| a.meta.tags.iter())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}
