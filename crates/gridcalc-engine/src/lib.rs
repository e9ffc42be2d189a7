#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Recursive-descent evaluation engine for GridCalc formulas.
//!
//! Formulas arrive as flat sequences of opaque [`gridcalc_model::Token`]s
//! (see [`tokenize`] for the reference tokenizer) and evaluate to an `f64`
//! through the grammar
//!
//! ```text
//! expression := term { ("+" | "-") term }
//! term       := factor { ("*" | "/") factor }
//! factor     := number | "(" expression ")" | cellReference
//! ```
//!
//! Cell references resolve through an injected [`CellResolver`] to the
//! referenced cell's cached value; the evaluator never re-evaluates other
//! cells mid-parse. Dependency-ordered recalculation of a whole
//! [`gridcalc_model::Sheet`], including cycle detection, lives in
//! [`recalculate`].
//!
//! Failure is communicated exclusively through [`Evaluator::error`] — no
//! panics cross the public boundary, and a non-empty error string is the
//! sole authority on whether [`Evaluator::result`] can be trusted.

pub mod coercion;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod recalc;

pub use error::EvalError;
pub use eval::{CellResolver, CellSnapshot, Evaluator};
pub use lexer::tokenize;
pub use recalc::recalculate;
