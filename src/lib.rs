pub mod catalog;
pub mod cli;
pub mod error;
pub mod search;
pub mod tracing;

pub use catalog::{Catalog, Category, Item, partition_by_category};
pub use error::CatalogError;
pub use search::{Matcher, NumberFormat, Scope, match_items, results_summary};
