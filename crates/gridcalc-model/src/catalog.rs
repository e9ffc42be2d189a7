//! User-visible error strings.
//!
//! The evaluator compares a referenced cell's error against
//! [`EMPTY_FORMULA`] by exact value (the "empty formula" sentinel) and
//! propagates any other non-empty cell error verbatim, so these constants
//! are the single source of truth for spelling.

/// Sentinel stored on a cell whose formula is empty.
pub const EMPTY_FORMULA: &str = "empty formula";

/// Unrecognized token, or leftover tokens after a complete expression.
pub const INVALID_FORMULA: &str = "invalid formula";

/// Tokens ran out in the middle of a factor.
pub const PARTIAL_FORMULA: &str = "partial formula";

/// Unbalanced grouping symbols.
pub const MISSING_PARENTHESES: &str = "missing parentheses";

/// Division by an exact zero.
pub const DIVIDE_BY_ZERO: &str = "divide by zero";

/// A referenced cell has no formula.
pub const INVALID_CELL: &str = "invalid cell";

/// A cell participates in a reference cycle.
pub const CIRCULAR_REFERENCE: &str = "circular reference";
