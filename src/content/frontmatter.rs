//! Article source parsing: a `+++`-delimited TOML block followed by markdown.
//!
//! ```text
//! +++
//! title = "Hello"
//! date = 2025-03-15
//! ...
//! +++
//!
//! Markdown body.
//! ```

use super::{Article, ArticleMeta, ContentError, types::MAX_DESCRIPTION_CHARS};
use regex::Regex;
use std::{path::Path, sync::LazyLock};

/// The front matter block of a source file, without its delimiters.
fn front_matter(source: &str) -> Option<&str> {
    static RE_FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?s)\A\+\+\+[ \t]*\r?\n(.*?)\r?\n\+\+\+[ \t]*(?:\r?\n|\z)").unwrap()
    });

    let source = source.trim_start_matches('\u{feff}');
    let caps = RE_FRONT_MATTER.captures(source)?;
    Some(caps.get(1)?.as_str())
}

/// Parse and validate one article file. The id is the file stem.
pub fn parse_article(path: &Path, source: &str) -> Result<Article, ContentError> {
    let front = front_matter(source).ok_or_else(|| ContentError::FrontMatter(path.to_path_buf()))?;
    let meta: ArticleMeta =
        toml::from_str(front).map_err(|err| ContentError::Parse(path.to_path_buf(), err))?;

    validate(&meta).map_err(|reason| ContentError::Validation {
        path: path.to_path_buf(),
        reason,
    })?;

    let id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ContentError::Validation {
            path: path.to_path_buf(),
            reason: "file name has no stem".into(),
        })?;

    Ok(Article::new(id, meta))
}

/// Checks serde cannot express.
fn validate(meta: &ArticleMeta) -> Result<(), String> {
    let len = meta.description.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(format!(
            "description is {len} characters, at most {MAX_DESCRIPTION_CHARS} allowed"
        ));
    }
    if meta.pillar_tags.is_empty() {
        return Err("at least one pillar tag is required".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::Category, i18n::Locale, utils::date::DateTimeUtc};

    const SOURCE: &str = "+++
title = \"Hello World\"
description = \"A first post\"
date = 2025-03-15
category = \"tutoriel\"
tags = [\"rust\", \"cli\"]
pillar_tags = [\"Ingénierie\"]
reading_time = 5
lang = \"en\"
+++

# Hello

Body text.
";

    #[test]
    fn test_front_matter() {
        assert_eq!(front_matter("+++\na = 1\n+++\nbody"), Some("a = 1"));
        assert_eq!(front_matter("+++\na = 1\nb = 2\n+++"), Some("a = 1\nb = 2"));
    }

    #[test]
    fn test_front_matter_crlf_and_bom() {
        assert_eq!(front_matter("\u{feff}+++\r\na = 1\r\n+++\r\nbody"), Some("a = 1"));
    }

    #[test]
    fn test_front_matter_missing_block() {
        assert!(front_matter("# no front matter").is_none());
        assert!(front_matter("+++\na = 1\n").is_none());
    }

    #[test]
    fn test_parse_article() {
        let article = parse_article(Path::new("content/hello-world.md"), SOURCE).unwrap();
        assert_eq!(article.id, "hello-world");
        assert_eq!(article.meta.title, "Hello World");
        assert_eq!(article.meta.date, DateTimeUtc::from_ymd(2025, 3, 15));
        assert_eq!(article.meta.category, Category::Tutoriel);
        assert_eq!(article.meta.tags, vec!["rust", "cli"]);
        assert_eq!(article.meta.lang, Locale::En);
    }

    #[test]
    fn test_parse_article_without_front_matter() {
        let err = parse_article(Path::new("a.md"), "# Title").unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter(_)));
    }

    #[test]
    fn test_parse_article_long_description() {
        let long = "x".repeat(MAX_DESCRIPTION_CHARS + 1);
        let source = SOURCE.replace("A first post", &long);
        let err = parse_article(Path::new("a.md"), &source).unwrap_err();
        assert!(matches!(err, ContentError::Validation { .. }));
    }

    #[test]
    fn test_parse_article_description_limit_counts_chars() {
        // 160 two-byte characters is still within the limit
        let accented = "é".repeat(MAX_DESCRIPTION_CHARS);
        let source = SOURCE.replace("A first post", &accented);
        assert!(parse_article(Path::new("a.md"), &source).is_ok());
    }

    #[test]
    fn test_parse_article_requires_pillar_tag() {
        let source = SOURCE.replace("[\"Ingénierie\"]", "[]");
        let err = parse_article(Path::new("a.md"), &source).unwrap_err();
        assert!(matches!(err, ContentError::Validation { .. }));
    }

    #[test]
    fn test_parse_article_invalid_toml() {
        let source = SOURCE.replace("reading_time = 5", "reading_time = \"five\"");
        let err = parse_article(Path::new("a.md"), &source).unwrap_err();
        assert!(matches!(err, ContentError::Parse(..)));
    }
}
