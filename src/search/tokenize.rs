//! Query tokenization and numeric token parsing.

use serde::{Deserialize, Serialize};

use super::normalize::fold;

/// Decimal conventions used when a query token is interpreted as a number.
///
/// The matcher has no ambient locale; callers pick the separator their users
/// type. Defaults to a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// `51.99`
    #[default]
    Period,
    /// `51,99`
    Comma,
}

impl NumberFormat {
    /// Parse a token under this format's decimal conventions.
    ///
    /// Returns `None` when the token is not a number; that only disables the
    /// numeric clauses for the token, it is never an error.
    pub(crate) fn parse(self, token: &str) -> Option<f64> {
        let canonical = match self {
            Self::Period => {
                // A comma here is a grouping character at best, never a
                // decimal point; reject rather than guess.
                if token.contains(',') {
                    return None;
                }
                std::borrow::Cow::Borrowed(token)
            }
            Self::Comma => {
                if token.contains('.') {
                    return None;
                }
                std::borrow::Cow::Owned(token.replace(',', "."))
            }
        };
        let value: f64 = canonical.parse().ok()?;
        value.is_finite().then_some(value)
    }
}

/// One whitespace-separated word of the query, pre-folded for substring
/// matching and pre-parsed for numeric matching.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Case- and diacritic-folded form, matched against folded item names.
    pub(crate) folded: String,
    /// Numeric interpretation, when the raw token parses as a number.
    pub(crate) number: Option<f64>,
}

/// Split a raw query into tokens: trim, then split on single spaces.
///
/// An empty query (after trimming) yields no tokens. Doubled spaces produce
/// empty fragments, which are dropped; an empty token's name clause would be
/// vacuously true anyway. Only the space character separates: a tab-joined
/// pair of words stays one token (which then matches no name).
pub(crate) fn tokenize(query: &str, format: NumberFormat) -> Vec<Token> {
    query
        .trim()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| Token {
            folded: fold(word),
            number: format.parse(word),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("Gladiolus", 1)]
    #[case("Gladiolus 2001", 2)]
    #[case("  Gladiolus   51.99  2001  ", 3)]
    fn tokenize_counts(#[case] query: &str, #[case] expected: usize) {
        check!(tokenize(query, NumberFormat::Period).len() == expected);
    }

    #[test]
    fn only_the_space_character_separates() {
        let tokens = tokenize("red\trose", NumberFormat::Period);
        check!(tokens.len() == 1);
        check!(tokens[0].folded == "red\trose");

        let tokens = tokenize("red rose", NumberFormat::Period);
        check!(tokens.len() == 2);
    }

    #[test]
    fn tokens_carry_folded_text_and_number() {
        let tokens = tokenize("Café 51.99", NumberFormat::Period);
        check!(tokens[0].folded == "cafe");
        check!(tokens[0].number.is_none());
        check!(tokens[1].folded == "51.99");
        check!(tokens[1].number == Some(51.99));
    }

    #[rstest]
    #[case(NumberFormat::Period, "51.99", Some(51.99))]
    #[case(NumberFormat::Period, "2001", Some(2001.0))]
    #[case(NumberFormat::Period, "51,99", None)]
    #[case(NumberFormat::Comma, "51,99", Some(51.99))]
    #[case(NumberFormat::Comma, "2001", Some(2001.0))]
    #[case(NumberFormat::Comma, "51.99", None)]
    #[case(NumberFormat::Period, "rose", None)]
    #[case(NumberFormat::Period, "NaN", None)]
    #[case(NumberFormat::Period, "inf", None)]
    fn numeric_parsing_follows_format(
        #[case] format: NumberFormat,
        #[case] token: &str,
        #[case] expected: Option<f64>,
    ) {
        check!(format.parse(token) == expected);
    }
}
