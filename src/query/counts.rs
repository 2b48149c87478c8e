use crate::content::{Article, Category};
use std::collections::BTreeMap;

/// Number of articles per requested category.
///
/// Every requested category gets an entry, zero included; nothing else does.
pub fn category_counts(articles: &[Article], requested: &[Category]) -> BTreeMap<Category, usize> {
    requested
        .iter()
        .map(|&category| {
            let count = articles.iter().filter(|a| a.meta.category == category).count();
            (category, count)
        })
        .collect()
}

/// Number of articles carrying each requested tag.
///
/// Every requested tag gets an entry, zero included; nothing else does.
pub fn tag_counts<S: AsRef<str>>(articles: &[Article], requested: &[S]) -> BTreeMap<String, usize> {
    requested
        .iter()
        .map(|tag| {
            let tag = tag.as_ref();
            let count = articles.iter().filter(|a| a.has_tag(tag)).count();
            (tag.to_owned(), count)
        })
        .collect()
}
