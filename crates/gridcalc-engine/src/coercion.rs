//! Numeric token coercion.

use gridcalc_model::Token;

/// Parse a token as a finite number.
///
/// Deliberately explicit and total: empty and whitespace-only tokens are
/// rejected rather than coerced to zero, and textual non-finite spellings
/// (`inf`, `NaN`) do not classify as numbers. Everything else follows
/// standard float syntax, including signs, decimals, and exponents.
pub fn parse_number(token: &Token) -> Option<f64> {
    let text = token.as_str();
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<f64> {
        parse_number(&Token::new(text))
    }

    #[test]
    fn accepts_standard_float_syntax() {
        assert_eq!(parse("0"), Some(0.0));
        assert_eq!(parse("42"), Some(42.0));
        assert_eq!(parse("3.5"), Some(3.5));
        assert_eq!(parse(".5"), Some(0.5));
        assert_eq!(parse("-2"), Some(-2.0));
        assert_eq!(parse("+7"), Some(7.0));
        assert_eq!(parse("1e3"), Some(1000.0));
        assert_eq!(parse("2.5e-2"), Some(0.025));
    }

    #[test]
    fn rejects_blank_tokens() {
        // Blank-as-zero coercion is explicitly not carried over.
        assert_eq!(parse(""), None);
        assert_eq!(parse(" "), None);
        assert_eq!(parse("\t"), None);
        assert_eq!(parse(" 1"), None);
        assert_eq!(parse("1 "), None);
    }

    #[test]
    fn rejects_non_finite_and_non_numeric() {
        assert_eq!(parse("inf"), None);
        assert_eq!(parse("-inf"), None);
        assert_eq!(parse("NaN"), None);
        assert_eq!(parse("A1"), None);
        assert_eq!(parse("1,5"), None);
        assert_eq!(parse("0x10"), None);
        assert_eq!(parse("1e999"), None); // overflows to infinity
    }
}
