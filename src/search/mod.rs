//! Catalog search: tokenization, normalization, and the matching predicate.
//!
//! This module implements free-text search over a catalog combined with an
//! optional category scope. The contract is a pure function from (catalog,
//! query, scope) to an order-preserving subsequence of the catalog.

// Module declarations
pub(crate) mod matcher;
pub(crate) mod normalize;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use matcher::{Matcher, Scope, match_items, results_summary};
pub use tokenize::NumberFormat;
