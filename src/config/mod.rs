//! Site configuration management for `lectern.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[base]`    | Site metadata (title, url)                      |
//! | `[build]`   | Paths, related limit, rss and index outputs     |
//! | `[extra]`   | User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "sebc.dev"
//! url = "https://sebc.dev"
//!
//! [build]
//! content = "content/articles"
//! output = "public"
//! related_limit = 3
//!
//! [build.rss]
//! enable = true
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

use base::BaseConfig;
use build::BuildConfig;
pub use error::ConfigError;

use crate::{
    cli::{Cli, Commands},
    i18n::Locale,
};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing lectern.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Output directory of one locale: `{output}/{locale}`.
    pub fn locale_output_dir(&self, locale: Locale) -> PathBuf {
        self.build.output.join(locale.code())
    }

    pub fn rss_path(&self, locale: Locale) -> PathBuf {
        self.locale_output_dir(locale).join(&self.build.rss.path)
    }

    pub fn index_path(&self, locale: Locale) -> PathBuf {
        self.locale_output_dir(locale).join(&self.build.index.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.update_path_with_root(&root, cli);

        Self::update_option(&mut self.base.url, cli.base_url.clone().map(Some).as_ref());

        if let Commands::Build { rss, index } = &cli.command {
            Self::update_option(&mut self.build.rss.enable, rss.as_ref());
            Self::update_option(&mut self.build.index.enable, index.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(&Self::expand_tilde(root));
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.content)));
        self.build.output = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.output)));
    }

    /// Expand a leading `~` to the home directory.
    fn expand_tilde(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before running a command
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            return Err(ConfigError::invalid(
                "base.url",
                "must start with http:// or https://",
            ));
        }

        if (self.build.rss.enable || self.build.index.enable) && self.base.url.is_none() {
            return Err(ConfigError::invalid(
                "base.url",
                "is required for rss and index generation",
            ));
        }

        if self.build.related_limit == 0 {
            return Err(ConfigError::invalid("build.related_limit", "must be at least 1"));
        }

        if !self.build.content.is_dir() {
            return Err(ConfigError::invalid(
                "build.content",
                format!("`{}` is not a directory", self.build.content.display()),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
