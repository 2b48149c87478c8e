//! `[base]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in lectern.toml - site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "sebc.dev"
/// url = "https://sebc.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used as the rss channel title.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Base URL for absolute links in feeds and share links.
    /// Required when any output is enabled.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}

impl BaseConfig {
    /// Absolute URL of a site path (`/en/articles/x`).
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.url.as_deref().unwrap_or_default().trim_end_matches('/');
        format!("{base}{path}")
    }
}
