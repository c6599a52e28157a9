//! The query-matching predicate and its combinators.
//!
//! A query is a set of whitespace-separated tokens. Each token is an OR of
//! three clauses (name substring, year equality, price equality); an item
//! matches the query when it satisfies every token, and a non-`All` scope
//! ANDs a category test on top. The result is always an order-preserving
//! subsequence of the catalog.

use crate::catalog::{Category, Item};

use super::normalize::contains_folded;
use super::tokenize::{NumberFormat, Token, tokenize};

/// Category filter applied alongside the free-text query. `All` means no
/// category restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Only(Category),
}

impl Scope {
    /// Scope-button titles, derived from the category enum: "All" followed
    /// by one label per category, in [`Category::ALL`] order.
    pub fn labels() -> Vec<&'static str> {
        std::iter::once("All")
            .chain(Category::ALL.iter().map(|category| category.label()))
            .collect()
    }

    /// Resolve a scope-button title back to a scope.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
            .map(Self::Only)
    }

    fn admits(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category() == category,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

/// Stateless query matcher. Holds only the numeric-parsing conventions;
/// filtering twice with identical inputs always yields identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    number_format: NumberFormat,
}

impl Matcher {
    pub const fn new(number_format: NumberFormat) -> Self {
        Self { number_format }
    }

    /// Filter `catalog` down to the items matching `query` under `scope`,
    /// preserving catalog order. Never fails; an unmatched query yields an
    /// empty vec.
    pub fn filter<'a>(&self, catalog: &'a [Item], query: &str, scope: Scope) -> Vec<&'a Item> {
        let tokens = tokenize(query, self.number_format);

        let results: Vec<&Item> = catalog
            .iter()
            .filter(|item| scope.admits(item) && matches_all_tokens(item, &tokens))
            .collect();

        tracing::debug!(
            query,
            %scope,
            tokens = tokens.len(),
            matched = results.len(),
            total = catalog.len(),
            "filtered catalog"
        );

        results
    }
}

/// AND across tokens: every token must independently match the item.
/// Zero tokens (an empty query) match everything.
fn matches_all_tokens(item: &Item, tokens: &[Token]) -> bool {
    tokens.iter().all(|token| matches_token(item, token))
}

/// OR within a token: name substring, year equality, or price equality.
/// The numeric clauses only apply when the token parsed as a number.
fn matches_token(item: &Item, token: &Token) -> bool {
    if contains_folded(item.name(), &token.folded) {
        return true;
    }
    match token.number {
        Some(number) => {
            f64::from(item.year_introduced()) == number || item.price() == number
        }
        None => false,
    }
}

/// Convenience wrapper over [`Matcher::filter`] with default (period-decimal)
/// numeric conventions.
pub fn match_items<'a>(catalog: &'a [Item], query: &str, scope: Scope) -> Vec<&'a Item> {
    Matcher::default().filter(catalog, query, scope)
}

/// The results-label text shown next to a filtered list.
pub fn results_summary(results: &[&Item]) -> String {
    if results.is_empty() {
        "No items found".to_string()
    } else {
        format!("Items found: {}", results.len())
    }
}
