//! Share links for social networks and cross-posting.
//!
//! Query values are fully percent-encoded: only `A-Z a-z 0-9 - _ . ~` are left
//! as is, so decoding a value gives back the exact input.

use serde::Serialize;
use urlencoding::encode;

/// Tweet intent with the title as text.
pub fn twitter_share_url(title: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        encode(title),
        encode(url)
    )
}

pub fn linkedin_share_url(title: &str, url: &str) -> String {
    format!(
        "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
        encode(url),
        encode(title)
    )
}

/// New dev.to draft prefilled with front matter and a back-link.
pub fn devto_share_url(title: &str, url: &str) -> String {
    let prefill = format!("---\ntitle: {title}\npublished: false\n---\n\nOriginally posted at {url}");
    format!("https://dev.to/new?prefill={}", encode(&prefill))
}

/// All share links of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub linkedin: String,
    pub devto: String,
}

impl ShareLinks {
    /// `url` must be absolute.
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            twitter: twitter_share_url(title, url),
            linkedin: linkedin_share_url(title, url),
            devto: devto_share_url(title, url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use urlencoding::decode;

    /// Value of query parameter `name`, percent-decoded.
    fn param(url: &str, name: &str) -> String {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{name}=")))
            .unwrap();
        decode(raw).unwrap().into_owned()
    }

    #[test]
    fn test_twitter_share_url() {
        assert_eq!(
            twitter_share_url("Hello World", "https://example.com/article"),
            "https://twitter.com/intent/tweet?text=Hello%20World&url=https%3A%2F%2Fexample.com%2Farticle"
        );
    }

    #[test]
    fn test_twitter_share_url_special_characters() {
        let result = twitter_share_url("C++ & Rust", "https://example.com/a?b=1");
        assert!(result.contains("text=C%2B%2B%20%26%20Rust"));
        assert!(result.contains("url=https%3A%2F%2Fexample.com%2Fa%3Fb%3D1"));
    }

    #[test]
    fn test_linkedin_share_url() {
        assert_eq!(
            linkedin_share_url("My Article", "https://example.com/post"),
            "https://www.linkedin.com/shareArticle?mini=true&url=https%3A%2F%2Fexample.com%2Fpost&title=My%20Article"
        );
    }

    #[test]
    fn test_devto_share_url() {
        let result = devto_share_url("My Post", "https://example.com/post");
        assert!(result.starts_with("https://dev.to/new?prefill="));

        let prefill = param(&result, "prefill");
        assert_eq!(
            prefill,
            "---\ntitle: My Post\npublished: false\n---\n\nOriginally posted at https://example.com/post"
        );
        assert!(!result.contains('\n'));
    }

    #[test]
    fn test_share_links() {
        let links = ShareLinks::new("T", "https://example.com/en/articles/t");
        assert_eq!(links.twitter, twitter_share_url("T", "https://example.com/en/articles/t"));
        assert_eq!(links.linkedin, linkedin_share_url("T", "https://example.com/en/articles/t"));
        assert_eq!(links.devto, devto_share_url("T", "https://example.com/en/articles/t"));
    }

    proptest! {
        #[test]
        fn prop_values_roundtrip(title in "\\PC{0,40}", path in "[a-z0-9/?=&#-]{0,30}") {
            let url = format!("https://example.com/{path}");

            let twitter = twitter_share_url(&title, &url);
            prop_assert_eq!(param(&twitter, "text"), title.clone());
            prop_assert_eq!(param(&twitter, "url"), url.clone());

            let linkedin = linkedin_share_url(&title, &url);
            prop_assert_eq!(param(&linkedin, "title"), title.clone());
            prop_assert_eq!(param(&linkedin, "url"), url.clone());

            let devto = devto_share_url(&title, &url);
            let expected = format!("---\ntitle: {title}\npublished: false\n---\n\nOriginally posted at {url}");
            prop_assert_eq!(param(&devto, "prefill"), expected);
        }
    }
}
