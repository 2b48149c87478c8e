//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::i18n::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lectern: content layer of a bilingual static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Article directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: lectern.toml)
    #[arg(short = 'C', long, default_value = "lectern.toml")]
    pub config: PathBuf,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the rss feed and article index of every locale
    Build {
        /// enable rss feed generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        rss: Option<bool>,

        /// enable json article index generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        index: Option<bool>,
    },

    /// List published articles of a locale, newest first
    List {
        #[arg(value_enum)]
        locale: Locale,
    },

    /// Rank the articles related to one article
    Related {
        #[arg(value_enum)]
        locale: Locale,

        /// article id
        id: String,

        /// maximum number of results (default: [build].related_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show categories and tags of a locale with their article counts
    Facets {
        #[arg(value_enum)]
        locale: Locale,
    },

    /// Print the index entry of the article behind a site path
    Show {
        /// site path, e.g. /fr/articles/my-article
        path: String,
    },

    /// Print the share links of an article
    Share {
        #[arg(value_enum)]
        locale: Locale,

        /// article id
        id: String,
    },
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from(["lectern", "build", "--rss", "false", "--index"]).unwrap();
        assert!(cli.is_build());
        match cli.command {
            Commands::Build { rss, index } => {
                assert_eq!(rss, Some(false));
                assert_eq!(index, Some(true));
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_parse_related() {
        let cli = Cli::try_parse_from(["lectern", "-C", "site.toml", "related", "fr", "mon-article", "-l", "5"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Related { locale, id, limit } => {
                assert_eq!(locale, Locale::Fr);
                assert_eq!(id, "mon-article");
                assert_eq!(limit, Some(5));
            }
            _ => panic!("expected related"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["lectern", "show", "/fr/articles/bonjour"]).unwrap();
        assert!(!cli.is_build());
        match cli.command {
            Commands::Show { path } => assert_eq!(path, "/fr/articles/bonjour"),
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["lectern", "list", "de"]).is_err());
    }
}
