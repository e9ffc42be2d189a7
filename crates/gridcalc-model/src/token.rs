use core::fmt;

use serde::{Deserialize, Serialize};

/// An atomic text unit of a formula.
///
/// A token is one of: numeric literal, operator symbol (`+ - * /`), grouping
/// symbol (`( )`), cell label, or unrecognized text. The distinction is not
/// stored here; consumers classify tokens by predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the opening grouping symbol `(`.
    #[inline]
    pub fn is_open_paren(&self) -> bool {
        self.0 == "("
    }

    /// True for the closing grouping symbol `)`.
    #[inline]
    pub fn is_close_paren(&self) -> bool {
        self.0 == ")"
    }
}

/// Build a token sequence from raw text units.
///
/// Convenience for hosts and tests that already hold tokenized text:
///
/// ```
/// use gridcalc_model::tokens;
///
/// let formula = tokens(["2", "+", "3"]);
/// assert_eq!(formula[1].as_str(), "+");
/// ```
pub fn tokens<I, S>(texts: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts.into_iter().map(Token::new).collect()
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_predicates() {
        assert!(Token::new("(").is_open_paren());
        assert!(Token::new(")").is_close_paren());
        assert!(!Token::new("()").is_open_paren());
        assert!(!Token::new("").is_close_paren());
    }

    #[test]
    fn token_compares_against_text() {
        assert_eq!(Token::new("+"), "+");
        assert_eq!(tokens(["1", "*", "A1"]).len(), 3);
    }
}
