use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Cell, CellRef, Token};

/// Sparse cell storage with deterministic (row-major) iteration order.
///
/// The serde representation is a sequence of `(CellRef, Cell)` entries so
/// the JSON form stays stable and map-key friendly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(CellRef, Cell)>", into = "Vec<(CellRef, Cell)>")]
pub struct Sheet {
    cells: BTreeMap<CellRef, Cell>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a formula, resetting the cell's cached value and error.
    pub fn set_formula(&mut self, cell: CellRef, formula: Vec<Token>) {
        self.cells.insert(cell, Cell::new(formula));
    }

    /// Remove a cell entirely, returning its previous state.
    pub fn clear(&mut self, cell: CellRef) -> Option<Cell> {
        self.cells.remove(&cell)
    }

    pub fn cell(&self, cell: CellRef) -> Option<&Cell> {
        self.cells.get(&cell)
    }

    pub fn cell_mut(&mut self, cell: CellRef) -> Option<&mut Cell> {
        self.cells.get_mut(&cell)
    }

    /// Addresses of all stored cells in row-major order.
    pub fn addresses(&self) -> impl Iterator<Item = CellRef> + '_ {
        self.cells.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells.iter().map(|(cell, data)| (*cell, data))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<(CellRef, Cell)>> for Sheet {
    fn from(entries: Vec<(CellRef, Cell)>) -> Self {
        Self {
            cells: entries.into_iter().collect(),
        }
    }
}

impl From<Sheet> for Vec<(CellRef, Cell)> {
    fn from(sheet: Sheet) -> Self {
        sheet.cells.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;
    use pretty_assertions::assert_eq;

    #[test]
    fn stores_and_clears_cells() {
        let mut sheet = Sheet::new();
        let a1 = CellRef::new(0, 0);

        sheet.set_formula(a1, tokens(["1", "+", "2"]));
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.cell(a1).unwrap().formula.len(), 3);

        // Re-setting a formula drops the cached value and error.
        sheet.cell_mut(a1).unwrap().value = 3.0;
        sheet.set_formula(a1, tokens(["7"]));
        assert_eq!(sheet.cell(a1).unwrap().value, 0.0);

        assert!(sheet.clear(a1).is_some());
        assert!(sheet.is_empty());
    }

    #[test]
    fn iteration_is_row_major() {
        let mut sheet = Sheet::new();
        sheet.set_formula(CellRef::new(1, 0), tokens(["1"]));
        sheet.set_formula(CellRef::new(0, 3), tokens(["2"]));
        sheet.set_formula(CellRef::new(0, 1), tokens(["3"]));

        let order: Vec<CellRef> = sheet.addresses().collect();
        assert_eq!(
            order,
            vec![CellRef::new(0, 1), CellRef::new(0, 3), CellRef::new(1, 0)]
        );
    }
}
