//! `[build]` section configuration.
//!
//! Contains input/output paths, the related-articles limit and per-output settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in lectern.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "content/articles"   # Article sources
/// output = "public"              # Generated feeds and indexes
/// related_limit = 3
///
/// [build.rss]
/// enable = true
/// path = "rss.xml"               # Written as {output}/{locale}/rss.xml
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not from file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory holding article sources.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Directory receiving generated files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Number of related articles computed per article.
    #[serde(default = "defaults::build::related_limit")]
    #[educe(Default = defaults::build::related_limit())]
    pub related_limit: usize,

    /// RSS feed settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// JSON article index settings.
    #[serde(default)]
    pub index: IndexConfig,
}

/// `[build.rss]` section - one feed per locale.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// File name inside each locale directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

/// `[build.index]` section - one JSON article index per locale.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// File name inside each locale directory.
    #[serde(default = "defaults::build::index::path")]
    #[educe(Default = defaults::build::index::path())]
    pub path: PathBuf,
}
