//! Character classification and text normalization for markdown-prepass.
//!
//! This crate is the layer in front of the parser: [`classify`] holds the
//! single-codepoint character classes the grammar is written against, and
//! [`normalize`] holds the pure text transforms (tab expansion, NUL
//! substitution, trimming, whitespace collapsing) the parser applies per
//! line or per fragment.
//!
//! Everything here is stateless and total; callers may shard a document by
//! line and invoke any of these functions concurrently.

pub mod classify;
pub mod normalize;

// Re-export key items for easier usage
pub use classify::*;
pub use normalize::*;
