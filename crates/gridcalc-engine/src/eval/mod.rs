mod evaluator;

pub use evaluator::{CellResolver, CellSnapshot, Evaluator};
