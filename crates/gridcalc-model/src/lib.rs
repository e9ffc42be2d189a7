#![forbid(unsafe_code)]

//! `gridcalc-model` defines the core in-memory data structures for GridCalc.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the evaluation engine (tokens, cell labels, resolver snapshots)
//! - host/IPC boundaries via `serde` (JSON-safe schema)
//!
//! Tokens are opaque text units: nothing about their classification is
//! recorded at tokenization time. The evaluator classifies them later by
//! predicate (numeric coercion, symbol equality, the label predicate on
//! [`CellRef`]).

mod address;
pub mod catalog;
mod cell;
mod sheet;
mod token;

pub use address::{CellRef, LabelParseError, GRID_MAX_COLS, GRID_MAX_ROWS};
pub use cell::Cell;
pub use sheet::Sheet;
pub use token::{tokens, Token};
