//! Error handling types and utilities.

/// A specialized Result type for catalog and search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods at the I/O seams.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when constructing a catalog item from invalid data.
///
/// These are contract violations flagged at construction time; the matching
/// core itself has no error conditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Item names must be non-empty.
    #[error("item name must not be empty")]
    EmptyName,
    /// Prices must be finite and non-negative.
    #[error("item '{name}' has invalid price {price}")]
    InvalidPrice { name: String, price: f64 },
}
