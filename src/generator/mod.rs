//! Per-locale output files: rss feed and JSON article index.

pub mod index;
pub mod rss;
