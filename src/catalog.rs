//! The product catalog: items, their categories, and derived groupings.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The occasion a product is sold for. Every item belongs to exactly one
/// category; the set is closed and ordered, and that order drives grouped
/// display (Birthdays rows first, then Weddings, then Funerals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Birthdays,
    Weddings,
    Funerals,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Birthdays, Self::Weddings, Self::Funerals];

    /// Human-readable label, also used as the scope-button title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Birthdays => "Birthdays",
            Self::Weddings => "Weddings",
            Self::Funerals => "Funerals",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry. Immutable once constructed; [`Item::new`] is the
/// only constructor and enforces the field invariants, so match-time code
/// never has to re-validate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    category: Category,
    year_introduced: u16,
    price: f64,
}

impl Item {
    /// Build an item, validating the caller-supplied fields.
    ///
    /// The price must be finite and non-negative and the name non-empty;
    /// violations are construction-time errors, never match-time ones.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        year_introduced: u16,
        price: f64,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::InvalidPrice { name, price });
        }
        Ok(Self {
            name,
            category,
            year_introduced,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn year_introduced(&self) -> u16 {
        self.year_introduced
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Display price, e.g. `$51.99`.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// On-disk shape of a catalog entry. Kept separate from [`Item`] so that
/// deserialized data still goes through [`Item::new`] validation.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    name: String,
    category: Category,
    year_introduced: u16,
    price: f64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = CatalogError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.name,
            record.category,
            record.year_introduced,
            record.price,
        )
    }
}

/// An ordered sequence of items. Insertion order is preserved everywhere:
/// search results and category partitions are always order-preserving views
/// of this sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse a catalog from a JSON array of item records.
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        let records: Vec<ItemRecord> = serde_json::from_str(json).context("invalid catalog JSON")?;
        let items = records
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(items))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog at {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("failed to parse catalog at {}", path.display()))?;
        tracing::info!(
            "Loaded catalog: {} items from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of items in the given category.
    pub fn count_for(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .count()
    }

    /// Resolve a per-category row position, the way a sectioned table does:
    /// `row` counts only items of `category`, in catalog order.
    pub fn item_at(&self, category: Category, row: usize) -> Option<&Item> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .nth(row)
    }

    /// The built-in sample data set.
    pub fn sample() -> Self {
        // Item::new cannot fail here: every name is non-empty and every
        // price is a non-negative literal.
        let items = [
            ("Ginger", Category::Birthdays, 2007, 49.98),
            ("Gladiolus", Category::Birthdays, 2001, 51.99),
            ("Orchid", Category::Birthdays, 2007, 16.99),
            ("Geranium", Category::Birthdays, 2006, 16.99),
            ("Daisy", Category::Birthdays, 2006, 16.99),
            ("Tulip", Category::Weddings, 1997, 39.99),
            ("Carnation Red", Category::Weddings, 2006, 23.99),
            ("Carnation White", Category::Weddings, 2007, 23.99),
            ("Sunflower", Category::Weddings, 2008, 25.00),
            ("Gardenia", Category::Weddings, 2006, 25.00),
            ("Daffodil", Category::Weddings, 2008, 24.99),
            ("Poinsettia Red", Category::Funerals, 2010, 31.99),
            ("Poinsettia Pink", Category::Funerals, 2011, 31.99),
            ("Red Rose", Category::Funerals, 2010, 24.99),
            ("White Rose", Category::Funerals, 2012, 24.99),
        ]
        .into_iter()
        .map(|(name, category, year, price)| {
            Item::new(name, category, year, price).unwrap_or_else(|e| {
                unreachable!("sample catalog entry is statically valid: {e}")
            })
        })
        .collect();
        Self::new(items)
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

/// Group a catalog by category, preserving catalog order within each group.
///
/// This is a pure derived view: the concatenation of the partitions (in
/// [`Category::ALL`] order) contains every item exactly once. Categories with
/// no items map to an empty group rather than being absent.
pub fn partition_by_category(items: &[Item]) -> BTreeMap<Category, Vec<&Item>> {
    let mut partitions: BTreeMap<Category, Vec<&Item>> = Category::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();
    for item in items {
        // Every category key was pre-seeded above.
        if let Some(group) = partitions.get_mut(&item.category) {
            group.push(item);
        }
    }
    partitions
}
