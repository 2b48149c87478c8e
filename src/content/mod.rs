//! Article records and the stores that supply them.
//!
//! ```text
//! content/articles/**/*.md ──► DirStore::open ──► ContentStore::query(filter)
//!                               (parse + validate,     (cloned, store order)
//!                                rayon per file)
//! ```

mod error;
mod frontmatter;
pub mod pillar;
pub mod store;
pub mod types;

pub use error::ContentError;
pub use pillar::PillarTag;
pub use store::{ContentStore, DirStore};
#[cfg(test)]
pub use store::MemoryStore;
pub use types::{Article, ArticleMeta, Category, Series};

#[cfg(test)]
pub mod fixtures;
