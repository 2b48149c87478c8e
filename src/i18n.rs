//! Locales, ui strings and locale-aware date formatting.
//!
//! Lookups are two-level: the requested locale's table first, then the
//! default locale's table. Unknown locale codes resolve to the default locale.

use crate::{content::Category, utils::date::DateTimeUtc};
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};

/// Site language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Human-readable language name, used by the language switcher.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Francais",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Locale of a site path, from its first segment (`/fr/articles/x` -> `fr`).
pub fn locale_from_path(path: &str) -> Locale {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    Locale::from_code_or_default(first)
}

// ============================================================================
// UI strings
// ============================================================================

type Table = FxHashMap<&'static str, &'static str>;

static EN: LazyLock<Table> = LazyLock::new(|| {
    Table::from_iter([
        ("site.title", "sebc.dev"),
        ("nav.home", "Home"),
        ("nav.search", "Search"),
        ("nav.about", "About"),
        ("footer.description", "Technical blog — AI x Engineering x UX"),
        ("footer.copyright", "All rights reserved."),
        ("lang.switch", "Switch to {label}"),
        ("404.title", "Page not found"),
        ("404.message", "This page doesn't exist."),
        ("404.back", "Go to homepage"),
        ("home.description", "Technical blog about AI, Software Engineering & UX"),
        ("home.noArticles", "No articles yet. Check back soon!"),
        ("home.filterAll", "All"),
        ("article.readingTime", "min read"),
        ("rss.description", "Technical blog -- AI x Engineering x UX"),
        ("category.actualites", "News"),
        ("category.analyse-approfondie", "Deep Dive"),
        ("category.parcours-apprentissage", "Learning Path"),
        ("category.retrospective", "Retrospective"),
        ("category.tutoriel", "Tutorial"),
        ("category.etude-de-cas", "Case Study"),
        ("category.astuces-rapides", "Quick Tips"),
        ("category.dans-les-coulisses", "Behind the Scenes"),
        ("category.test-outil", "Tool Review"),
    ])
});

static FR: LazyLock<Table> = LazyLock::new(|| {
    Table::from_iter([
        ("nav.home", "Accueil"),
        ("nav.search", "Recherche"),
        ("nav.about", "À propos"),
        ("footer.description", "Blog technique — IA x Ingenierie x UX"),
        ("footer.copyright", "Tous droits reserves."),
        ("lang.switch", "Passer en {label}"),
        ("404.title", "Page introuvable"),
        ("404.message", "Cette page n'existe pas."),
        ("404.back", "Retour a l'accueil"),
        ("home.description", "Blog technique sur l'IA, l'Ingénierie logicielle & l'UX"),
        ("home.noArticles", "Pas encore d'articles. Revenez bientôt !"),
        ("home.filterAll", "Tous"),
        ("article.readingTime", "min de lecture"),
        ("rss.description", "Blog technique -- IA x Ingenierie x UX"),
        ("category.actualites", "Actualités"),
        ("category.analyse-approfondie", "Analyse approfondie"),
        ("category.parcours-apprentissage", "Parcours d'apprentissage"),
        ("category.retrospective", "Rétrospective"),
        ("category.tutoriel", "Tutoriel"),
        ("category.etude-de-cas", "Étude de cas"),
        ("category.astuces-rapides", "Astuces rapides"),
        ("category.dans-les-coulisses", "Dans les coulisses"),
        ("category.test-outil", "Test d'outil"),
    ])
});

fn table(locale: Locale) -> &'static Table {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
    }
}

/// Translate `key`, falling back to the default locale.
pub fn t(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .get(key)
        .or_else(|| table(Locale::default()).get(key))
        .copied()
}

/// Display label of a category; the slug itself when no table has one.
pub fn category_label(category: Category, locale: Locale) -> &'static str {
    let key = format!("category.{}", category.as_str());
    t(locale, &key).unwrap_or(category.as_str())
}

// ============================================================================
// Dates
// ============================================================================

const MONTHS_SHORT_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Format a date as day, short month and year in the conventions of `lang`.
///
/// `en`: `Mar 15, 2025`. `fr`: `15 mars 2025`. Other codes use `en`.
pub fn format_date(date: DateTimeUtc, lang: &str) -> String {
    let month = date.month_index();
    match Locale::from_code_or_default(lang) {
        Locale::En => format!(
            "{} {}, {}",
            crate::utils::date::MONTHS_SHORT[month],
            date.day,
            date.year
        ),
        Locale::Fr => format!("{} {} {}", date.day, MONTHS_SHORT_FR[month], date.year),
    }
}
