//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_catalog`: the built-in 15-item sample catalog
//! - `catalog_file`: a temp directory holding a small catalog JSON file,
//!   for exercising the loading path with filesystem isolation

use flower_search::catalog::Catalog;
use rstest::fixture;
use std::path::PathBuf;
use tempfile::TempDir;

/// A catalog JSON file in a temp directory that is cleaned up on drop.
#[allow(dead_code)] // Used across different integration test crates
pub struct CatalogFile {
    _temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)] // Used across different integration test crates
pub const SMALL_CATALOG_JSON: &str = r#"[
    { "name": "Ginger", "category": "Birthdays", "year_introduced": 2007, "price": 49.98 },
    { "name": "Gladiolus", "category": "Birthdays", "year_introduced": 2001, "price": 51.99 },
    { "name": "Red Rose", "category": "Funerals", "year_introduced": 2010, "price": 24.99 }
]"#;

#[fixture]
pub fn sample_catalog() -> Catalog {
    Catalog::sample()
}

#[fixture]
pub fn catalog_file() -> CatalogFile {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("catalog.json");
    std::fs::write(&path, SMALL_CATALOG_JSON).expect("failed to write catalog file");
    CatalogFile { _temp: temp, path }
}
