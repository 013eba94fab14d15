//! # View Models
//!
//! Pure decisions sitting between fetched data and the rendered page.

pub mod classifier;

pub use classifier::{classify, Classification, MAX_LISTED};
