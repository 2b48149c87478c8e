//! Utility modules shared by the content layer and the generators.

pub mod date;
pub mod log;
