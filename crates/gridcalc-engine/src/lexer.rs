//! Formula tokenizer.
//!
//! Splits raw formula text into opaque [`Token`]s. Tokenization is purely
//! lexical: numbers, identifier runs (cell labels), and one-character
//! symbols all come out as plain text, and the evaluator classifies them
//! later by predicate. Unrecognized characters become one-character tokens
//! that the evaluator rejects as invalid.

use gridcalc_model::Token;

/// Tokenize formula text. A leading `=` is accepted and dropped.
pub fn tokenize(formula: &str) -> Vec<Token> {
    let src = formula.strip_prefix('=').unwrap_or(formula);
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();

    let mut idx = 0usize;
    while idx < bytes.len() {
        let b = bytes[idx];
        if b.is_ascii_whitespace() {
            idx += 1;
            continue;
        }

        let start = idx;
        if b.is_ascii_digit() || b == b'.' {
            // Number run. Malformed runs like `1.2.3` still lex as one
            // token; numeric coercion rejects them downstream.
            idx += 1;
            while idx < bytes.len() && (bytes[idx].is_ascii_digit() || bytes[idx] == b'.') {
                idx += 1;
            }
        } else if b.is_ascii_alphabetic() || b == b'$' {
            // Identifier run: column letters then row digits (e.g. `A1`).
            idx += 1;
            while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'$') {
                idx += 1;
            }
        } else {
            // Operators, parentheses, and anything unrecognized are one
            // character each.
            idx += src[idx..].chars().next().map_or(1, char::len_utf8);
        }
        tokens.push(Token::new(&src[start..idx]));
    }

    tokens
}
