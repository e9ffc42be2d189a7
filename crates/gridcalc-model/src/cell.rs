use serde::{Deserialize, Serialize};

use crate::{catalog, Token};

/// A single grid cell: formula tokens, cached numeric value, and error state.
///
/// `error` is a plain string rather than a typed enum because the evaluator
/// both compares it against the catalog's "empty formula" sentinel by exact
/// value and propagates arbitrary non-sentinel text verbatim into
/// referencing formulas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Tokenized formula; empty when the cell holds no formula.
    pub formula: Vec<Token>,
    /// Cached numeric value from the last recalculation.
    pub value: f64,
    /// Error state; the empty string means no error.
    pub error: String,
}

impl Cell {
    /// A cell holding `formula` with no cached value or error yet.
    pub fn new(formula: Vec<Token>) -> Self {
        Self {
            formula,
            value: 0.0,
            error: String::new(),
        }
    }

    /// True when the cell has no formula at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formula.is_empty()
    }

    /// True when `error` should propagate into formulas referencing this
    /// cell: non-empty and not the "empty formula" sentinel. The sentinel is
    /// re-reported as "invalid cell" by the referencing side instead.
    pub fn has_reportable_error(&self) -> bool {
        !self.error.is_empty() && self.error != catalog::EMPTY_FORMULA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    #[test]
    fn sentinel_error_is_not_reportable() {
        let mut cell = Cell::new(Vec::new());
        assert!(!cell.has_reportable_error());

        cell.error = catalog::EMPTY_FORMULA.to_string();
        assert!(!cell.has_reportable_error());

        cell.error = catalog::DIVIDE_BY_ZERO.to_string();
        assert!(cell.has_reportable_error());
    }

    #[test]
    fn emptiness_tracks_the_formula_only() {
        let mut cell = Cell::new(tokens(["1"]));
        assert!(!cell.is_empty());
        cell.formula.clear();
        assert!(cell.is_empty());
    }
}
