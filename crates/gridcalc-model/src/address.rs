use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum rows per sheet (Excel-compatible: 1,048,576).
pub const GRID_MAX_ROWS: u32 = 1_048_576;

/// Maximum columns per sheet (Excel-compatible: 16,384, i.e. `XFD`).
pub const GRID_MAX_COLS: u32 = 16_384;

/// A reference to a single cell, addressable by an A1-style label.
///
/// Rows and columns are **0-indexed**:
/// - `row = 0` is grid row `1`
/// - `col = 0` is grid column `A`
///
/// The derived ordering is row-major, which gives [`crate::Sheet`] its
/// deterministic iteration order.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellRef {
    /// 0-indexed row.
    pub row: u32,
    /// 0-indexed column.
    pub col: u32,
}

impl CellRef {
    /// Construct a new [`CellRef`].
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Label-validity predicate: does `text` name a cell?
    ///
    /// This is the lexical rule the evaluator's factor rule applies to an
    /// unclassified token before treating it as a cell reference.
    #[inline]
    pub fn is_valid_label(text: &str) -> bool {
        Self::from_a1(text).is_ok()
    }

    /// Parse an A1-style label (e.g. `A1`, `bc32`, `$B$2`).
    ///
    /// Column letters are case-insensitive and `$` markers are accepted; no
    /// surrounding whitespace is allowed, since labels arrive as already
    /// trimmed tokens.
    pub fn from_a1(label: &str) -> Result<Self, LabelParseError> {
        let bytes = label.as_bytes();
        if bytes.is_empty() {
            return Err(LabelParseError::Empty);
        }

        let mut idx = 0usize;
        if bytes[0] == b'$' {
            idx = 1;
        }

        let mut col: u64 = 0;
        let col_start = idx;
        while let Some(b) = bytes.get(idx).filter(|b| b.is_ascii_alphabetic()) {
            // Bijective base-26: A=1 .. Z=26, bounded as we go so absurdly
            // long letter runs cannot overflow.
            col = col * 26 + u64::from(b.to_ascii_uppercase() - b'A') + 1;
            if col > u64::from(GRID_MAX_COLS) {
                return Err(LabelParseError::ColumnOutOfBounds);
            }
            idx += 1;
        }
        if idx == col_start {
            return Err(LabelParseError::MissingColumn);
        }

        if bytes.get(idx) == Some(&b'$') {
            idx += 1;
        }

        let row_start = idx;
        while bytes.get(idx).is_some_and(|b| b.is_ascii_digit()) {
            idx += 1;
        }
        if idx == row_start {
            return Err(LabelParseError::MissingRow);
        }
        if idx != bytes.len() {
            return Err(LabelParseError::TrailingCharacters);
        }

        let row_1_based: u64 = label[row_start..]
            .parse()
            .map_err(|_| LabelParseError::RowOutOfBounds)?;
        if row_1_based == 0 || row_1_based > u64::from(GRID_MAX_ROWS) {
            return Err(LabelParseError::RowOutOfBounds);
        }

        Ok(Self {
            row: (row_1_based - 1) as u32,
            col: (col - 1) as u32,
        })
    }

    /// Format as an A1-style label (e.g. `A1`, `BC32`).
    pub fn to_a1(self) -> String {
        let mut letters = String::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.insert(0, char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        format!("{letters}{}", self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// Errors from parsing an A1-style cell label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LabelParseError {
    #[error("empty cell label")]
    Empty,
    #[error("missing column letters in cell label")]
    MissingColumn,
    #[error("missing row digits in cell label")]
    MissingRow,
    #[error("column out of grid bounds")]
    ColumnOutOfBounds,
    #[error("row out of grid bounds")]
    RowOutOfBounds,
    #[error("trailing characters after cell label")]
    TrailingCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn a1_roundtrip() {
        let c = CellRef::new(0, 0);
        assert_eq!(c.to_a1(), "A1");
        assert_eq!(CellRef::from_a1("A1").unwrap(), c);
        assert_eq!(CellRef::from_a1("$A$1").unwrap(), c);

        let c2 = CellRef::new(31, 54); // BC32
        assert_eq!(c2.to_a1(), "BC32");
        assert_eq!(CellRef::from_a1("bc32").unwrap(), c2);
    }

    #[test]
    fn bounds_are_grid_compatible() {
        assert!(CellRef::from_a1("XFD1048576").is_ok());
        assert_eq!(
            CellRef::from_a1("XFE1"),
            Err(LabelParseError::ColumnOutOfBounds)
        );
        assert_eq!(
            CellRef::from_a1("A1048577"),
            Err(LabelParseError::RowOutOfBounds)
        );
        assert_eq!(CellRef::from_a1("A0"), Err(LabelParseError::RowOutOfBounds));
    }

    #[test]
    fn label_predicate_rejects_non_labels() {
        assert!(CellRef::is_valid_label("A1"));
        assert!(CellRef::is_valid_label("zz99"));
        assert!(!CellRef::is_valid_label(""));
        assert!(!CellRef::is_valid_label("1A"));
        assert!(!CellRef::is_valid_label("A"));
        assert!(!CellRef::is_valid_label("42"));
        assert!(!CellRef::is_valid_label("A1B"));
        assert!(!CellRef::is_valid_label(" A1"));
        assert!(!CellRef::is_valid_label("A1 "));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(CellRef::new(0, 5) < CellRef::new(1, 0));
        assert!(CellRef::new(2, 1) < CellRef::new(2, 3));
    }
}
