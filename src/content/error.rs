//! Content loading error types.

use crate::i18n::Locale;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading articles into a store.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to walk content directory `{0}`")]
    Walk(PathBuf, #[source] walkdir::Error),

    #[error("`{0}` does not start with a `+++` front matter block")]
    FrontMatter(PathBuf),

    #[error("Front matter parsing error in `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Invalid article `{path}`: {reason}")]
    Validation { path: PathBuf, reason: String },

    #[error("Duplicate article id `{id}` for locale `{locale}`")]
    Duplicate { id: String, locale: Locale },
}
