//! Article records as supplied by the content store.

use super::pillar::PillarTag;
use crate::{i18n::Locale, utils::date::DateTimeUtc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 160;

/// Article category. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Actualites,
    AnalyseApprofondie,
    ParcoursApprentissage,
    Retrospective,
    Tutoriel,
    EtudeDeCas,
    AstucesRapides,
    DansLesCoulisses,
    TestOutil,
}

impl Category {
    /// Canonical order, the single source of truth for category listings.
    pub const ALL: [Category; 9] = [
        Category::Actualites,
        Category::AnalyseApprofondie,
        Category::ParcoursApprentissage,
        Category::Retrospective,
        Category::Tutoriel,
        Category::EtudeDeCas,
        Category::AstucesRapides,
        Category::DansLesCoulisses,
        Category::TestOutil,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actualites => "actualites",
            Self::AnalyseApprofondie => "analyse-approfondie",
            Self::ParcoursApprentissage => "parcours-apprentissage",
            Self::Retrospective => "retrospective",
            Self::Tutoriel => "tutoriel",
            Self::EtudeDeCas => "etude-de-cas",
            Self::AstucesRapides => "astuces-rapides",
            Self::DansLesCoulisses => "dans-les-coulisses",
            Self::TestOutil => "test-outil",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an article within a multi-part series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Series {
    pub id: String,
    pub episode: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

/// Front-matter metadata of an article.
///
/// Field names are snake_case; the camelCase spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleMeta {
    pub title: String,

    pub description: String,

    pub date: DateTimeUtc,

    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(alias = "pillarTags")]
    pub pillar_tags: Vec<PillarTag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Estimated reading time in minutes.
    #[serde(alias = "readingTime")]
    pub reading_time: u32,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub draft: bool,

    pub lang: Locale,

    /// Id of the same article in the other locale.
    #[serde(default, alias = "translationSlug", skip_serializing_if = "Option::is_none")]
    pub translation_slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
}

/// A loaded article: its id (URL slug) plus metadata. The markdown body is
/// left to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub meta: ArticleMeta,
}

impl Article {
    pub fn new(id: impl Into<String>, meta: ArticleMeta) -> Self {
        Self {
            id: id.into(),
            meta,
        }
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.meta.lang
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        !self.meta.draft
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.meta.tags.iter().any(|t| t == tag)
    }
}
