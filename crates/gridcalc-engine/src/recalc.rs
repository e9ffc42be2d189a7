//! Whole-sheet recalculation.
//!
//! Evaluates every stored cell against the sheet in dependency order,
//! writing cached values and error strings back. Reference cycles are
//! detected with a three-color depth-first pass: the cell whose reference
//! closes a cycle gets the `circular reference` catalog error directly, and
//! every cell that reads it inherits the error through verbatim cell-error
//! propagation.

use std::collections::HashMap;

use gridcalc_model::{catalog, CellRef, Sheet};
use smallvec::SmallVec;

use crate::eval::Evaluator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
    Circular,
}

/// Recalculate every cell in the sheet.
///
/// Empty-formula cells end up carrying the "empty formula" sentinel, which
/// referencing formulas re-report as `invalid cell`. Iteration over the
/// sheet is row-major, so results are deterministic regardless of insertion
/// order.
pub fn recalculate(sheet: &mut Sheet) {
    let addresses: Vec<CellRef> = sheet.addresses().collect();

    let mut marks: HashMap<CellRef, Mark> = HashMap::new();
    let mut order: Vec<CellRef> = Vec::with_capacity(addresses.len());
    for cell in &addresses {
        visit(sheet, *cell, &mut marks, &mut order);
    }

    // Latch circular errors first so evaluation of the remaining cells
    // observes them.
    for (cell, mark) in &marks {
        if *mark == Mark::Circular {
            if let Some(slot) = sheet.cell_mut(*cell) {
                slot.value = 0.0;
                slot.error = catalog::CIRCULAR_REFERENCE.to_string();
            }
        }
    }

    for cell in order {
        let formula = match sheet.cell(cell) {
            Some(slot) => slot.formula.clone(),
            None => continue,
        };
        let (value, error) = {
            let mut evaluator = Evaluator::new(&*sheet);
            evaluator.evaluate(&formula);
            (evaluator.result(), evaluator.error().to_string())
        };
        if let Some(slot) = sheet.cell_mut(cell) {
            slot.value = value;
            slot.error = error;
        }
    }
}

fn visit(
    sheet: &Sheet,
    cell: CellRef,
    marks: &mut HashMap<CellRef, Mark>,
    order: &mut Vec<CellRef>,
) {
    match marks.get(&cell) {
        Some(Mark::Visiting) => {
            // Back-edge: this cell's reference closes a cycle.
            marks.insert(cell, Mark::Circular);
            return;
        }
        Some(_) => return,
        None => {}
    }

    marks.insert(cell, Mark::Visiting);
    for dep in references(sheet, cell) {
        visit(sheet, dep, marks, order);
    }

    // A descendant may have flipped this cell to Circular.
    if marks.get(&cell) == Some(&Mark::Visiting) {
        marks.insert(cell, Mark::Done);
        order.push(cell);
    }
}

/// Cell labels referenced by `cell`'s formula tokens.
fn references(sheet: &Sheet, cell: CellRef) -> SmallVec<[CellRef; 4]> {
    let Some(slot) = sheet.cell(cell) else {
        return SmallVec::new();
    };
    slot.formula
        .iter()
        .filter_map(|token| CellRef::from_a1(token.as_str()).ok())
        .collect()
}
