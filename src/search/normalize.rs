//! Case and diacritic folding for substring matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string for comparison: NFD-decompose, drop combining marks, then
/// lowercase. After folding, accented and unaccented spellings compare equal
/// ("Café" and "cafe" both fold to "cafe").
pub(crate) fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case- and diacritic-insensitive substring test.
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}
