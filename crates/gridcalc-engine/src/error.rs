use gridcalc_model::catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Evaluation failure kinds.
///
/// Display spellings come from [`gridcalc_model::catalog`] so the strings a
/// host compares against have a single source of truth. `Cell` carries a
/// referenced cell's own error text, propagated verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EvalError {
    /// The formula had no tokens at all.
    #[error("{}", catalog::EMPTY_FORMULA)]
    EmptyFormula,
    /// Unrecognized token, or leftover tokens after a structurally complete
    /// expression.
    #[error("{}", catalog::INVALID_FORMULA)]
    InvalidFormula,
    /// Tokens ran out in the middle of a factor.
    #[error("{}", catalog::PARTIAL_FORMULA)]
    PartialFormula,
    /// Unbalanced grouping symbols.
    #[error("{}", catalog::MISSING_PARENTHESES)]
    MissingParentheses,
    /// Division by an exact zero.
    #[error("{}", catalog::DIVIDE_BY_ZERO)]
    DivideByZero,
    /// A referenced cell has no formula (or does not exist).
    #[error("{}", catalog::INVALID_CELL)]
    InvalidCell,
    /// A cell participates in a reference cycle.
    #[error("{}", catalog::CIRCULAR_REFERENCE)]
    CircularReference,
    /// Verbatim error text carried over from a referenced cell.
    #[error("{0}")]
    Cell(String),
}

impl EvalError {
    /// Catalog spelling for this error without allocating.
    ///
    /// For [`EvalError::Cell`] this is the propagated text itself.
    pub fn message(&self) -> &str {
        match self {
            EvalError::EmptyFormula => catalog::EMPTY_FORMULA,
            EvalError::InvalidFormula => catalog::INVALID_FORMULA,
            EvalError::PartialFormula => catalog::PARTIAL_FORMULA,
            EvalError::MissingParentheses => catalog::MISSING_PARENTHESES,
            EvalError::DivideByZero => catalog::DIVIDE_BY_ZERO,
            EvalError::InvalidCell => catalog::INVALID_CELL,
            EvalError::CircularReference => catalog::CIRCULAR_REFERENCE,
            EvalError::Cell(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_message() {
        let kinds = [
            EvalError::EmptyFormula,
            EvalError::InvalidFormula,
            EvalError::PartialFormula,
            EvalError::MissingParentheses,
            EvalError::DivideByZero,
            EvalError::InvalidCell,
            EvalError::CircularReference,
            EvalError::Cell("anything".to_string()),
        ];
        for kind in kinds {
            assert_eq!(kind.to_string(), kind.message());
        }
    }
}
