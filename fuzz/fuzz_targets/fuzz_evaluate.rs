#![no_main]

use libfuzzer_sys::fuzz_target;

use gridcalc_engine::{recalculate, tokenize, Evaluator};
use gridcalc_model::{catalog, tokens, CellRef, Sheet};

/// Keep evaluation fuzzing bounded: plenty of inputs per second, without
/// letting pathological token streams drive very large allocations.
const MAX_FORMULA_CHARS: usize = 2_048;

fn truncate_to_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A small sheet with the interesting resolver states: a cached value, an
/// empty formula (sentinel), a carried error, and a two-cell cycle.
fn seed_sheet() -> Sheet {
    let mut sheet = Sheet::new();
    sheet.set_formula(CellRef::new(0, 0), tokens(["2", "+", "3"])); // A1
    sheet.set_formula(CellRef::new(0, 1), Vec::new()); // B1
    sheet.set_formula(CellRef::new(0, 2), tokens(["1", "/", "0"])); // C1
    sheet.set_formula(CellRef::new(1, 0), tokens(["B2"])); // A2
    sheet.set_formula(CellRef::new(1, 1), tokens(["A2"])); // B2
    recalculate(&mut sheet);
    sheet
}

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let formula = tokenize(truncate_to_chars(&input, MAX_FORMULA_CHARS));

    let sheet = seed_sheet();
    let mut evaluator = Evaluator::new(&sheet);

    evaluator.evaluate(&formula);
    let first = (evaluator.result(), evaluator.error().to_string());

    if formula.is_empty() {
        assert_eq!(first.1, catalog::EMPTY_FORMULA);
    }

    // Idempotence: same tokens, unchanged resolver state, same outcome.
    evaluator.evaluate(&formula);
    assert_eq!(first.0.to_bits(), evaluator.result().to_bits());
    assert_eq!(first.1, evaluator.error());
});
