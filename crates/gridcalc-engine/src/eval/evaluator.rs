use gridcalc_model::{catalog, Cell, CellRef, Sheet, Token};

use crate::coercion;
use crate::error::EvalError;

/// Snapshot of a referenced cell's externally-owned state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellSnapshot {
    /// The referenced cell's own formula tokens.
    pub formula: Vec<Token>,
    /// The referenced cell's cached numeric value.
    pub value: f64,
    /// The referenced cell's error string; empty means no error.
    pub error: String,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            formula: cell.formula.clone(),
            value: cell.value,
            error: cell.error.clone(),
        }
    }
}

/// Capability to resolve a cell label to the referenced cell's state.
///
/// Injected into the evaluator so it can be tested against mock storage.
/// Storage is read-only from the evaluator's perspective; resolution must
/// not mutate cells mid-evaluation.
pub trait CellResolver {
    /// The referenced cell's formula/value/error triple, or `None` when no
    /// such cell is stored.
    fn resolve(&self, cell: CellRef) -> Option<CellSnapshot>;
}

impl CellResolver for Sheet {
    fn resolve(&self, cell: CellRef) -> Option<CellSnapshot> {
        self.cell(cell).map(CellSnapshot::from)
    }
}

/// Recursive-descent evaluator over pre-tokenized formulas.
///
/// The error model is sticky but non-short-circuiting: once a failure is
/// recorded the result is no longer trustworthy, yet grammar rules keep
/// consuming tokens and folding values (including `Infinity` from a zero
/// divisor) so the recursive folds stay well-defined. A later failure
/// overwrites the recorded message; the flag itself never clears within one
/// evaluation.
///
/// Callers must treat a non-empty [`Evaluator::error`] as the sole authority
/// on success; [`Evaluator::result`] is meaningful only when it is empty.
pub struct Evaluator<'a, R: CellResolver> {
    resolver: &'a R,
    result: f64,
    error: Option<EvalError>,
}

impl<'a, R: CellResolver> Evaluator<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            result: 0.0,
            error: None,
        }
    }

    /// Clear the transient result/error state from the previous evaluation.
    pub fn reset(&mut self) {
        self.result = 0.0;
        self.error = None;
    }

    /// Evaluate a token sequence.
    ///
    /// The caller's sequence is never mutated; evaluation walks a private
    /// cursor over the slice, consuming tokens strictly front-to-back. The
    /// outcome is exposed through [`Evaluator::result`] and
    /// [`Evaluator::error`].
    pub fn evaluate(&mut self, formula: &[Token]) {
        self.reset();
        if formula.is_empty() {
            self.error = Some(EvalError::EmptyFormula);
            return;
        }

        let mut cursor = Cursor {
            resolver: self.resolver,
            tokens: formula,
            pos: 0,
            error: None,
        };
        self.result = cursor.expression();

        // Trailing garbage after a structurally complete expression. The
        // check only fires when parsing recorded nothing; a parse error
        // already marks the result untrustworthy.
        if cursor.error.is_none() && !cursor.is_exhausted() {
            cursor.error = Some(EvalError::InvalidFormula);
        }
        self.error = cursor.error;
    }

    /// Last computed value.
    ///
    /// May legitimately be `Infinity` or any finite real, but is meaningful
    /// only while [`Evaluator::error`] is empty.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Error text for the last evaluation; empty on success.
    pub fn error(&self) -> &str {
        self.error.as_ref().map_or("", EvalError::message)
    }

    /// Typed view of the last evaluation's failure, if any.
    pub fn error_kind(&self) -> Option<&EvalError> {
        self.error.as_ref()
    }
}

/// Transient parse state: an immutable token slice plus a position index,
/// and the sticky error slot.
struct Cursor<'a, R: CellResolver> {
    resolver: &'a R,
    tokens: &'a [Token],
    pos: usize,
    error: Option<EvalError>,
}

impl<'a, R: CellResolver> Cursor<'a, R> {
    fn is_exhausted(&self) -> bool {
        self.pos == self.tokens.len()
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Latch a failure. The flag is sticky within one evaluation, but a
    /// later kind overwrites the recorded message.
    fn record(&mut self, error: EvalError) {
        self.error = Some(error);
    }

    /// `expression := term { ("+" | "-") term }`
    ///
    /// The loop condition only checks for remaining additive operators; it
    /// deliberately ignores the error flag so parsing keeps consuming
    /// tokens after a failure.
    fn expression(&mut self) -> f64 {
        let mut value = self.term();
        while let Some(op) = self.peek().and_then(AddOp::classify) {
            self.pos += 1;
            let rhs = self.term();
            value = match op {
                AddOp::Add => value + rhs,
                AddOp::Sub => value - rhs,
            };
        }
        value
    }

    /// `term := factor { ("*" | "/") factor }`
    fn term(&mut self) -> f64 {
        let mut value = self.factor();
        while let Some(op) = self.peek().and_then(MulOp::classify) {
            self.pos += 1;
            let rhs = self.factor();
            match op {
                MulOp::Mul => value *= rhs,
                MulOp::Div => {
                    if rhs == 0.0 {
                        // Short-circuits the rest of this term only; the
                        // enclosing expression still folds the Infinity
                        // into its own accumulator.
                        self.record(EvalError::DivideByZero);
                        return f64::INFINITY;
                    }
                    value /= rhs;
                }
            }
        }
        value
    }

    /// `factor := number | "(" expression ")" | cellReference`
    fn factor(&mut self) -> f64 {
        let Some(token) = self.advance() else {
            self.record(EvalError::PartialFormula);
            return 0.0;
        };

        if let Some(number) = coercion::parse_number(token) {
            return number;
        }

        if token.is_open_paren() {
            let value = self.expression();
            match self.advance() {
                Some(close) if close.is_close_paren() => {}
                // Exhausted, or the next token is not `)`. The inner value
                // is still returned, error aside.
                _ => self.record(EvalError::MissingParentheses),
            }
            return value;
        }

        if let Ok(cell) = CellRef::from_a1(token.as_str()) {
            return self.reference(cell);
        }

        self.record(EvalError::InvalidFormula);
        0.0
    }

    /// Resolve a cell reference to its cached value, translating the
    /// referenced cell's own state into this formula's error model.
    fn reference(&mut self, cell: CellRef) -> f64 {
        let Some(snapshot) = self.resolver.resolve(cell) else {
            // An unknown cell is indistinguishable from one whose formula
            // is empty.
            self.record(EvalError::InvalidCell);
            return 0.0;
        };

        if !snapshot.error.is_empty() && snapshot.error != catalog::EMPTY_FORMULA {
            self.record(EvalError::Cell(snapshot.error));
            return 0.0;
        }

        if snapshot.formula.is_empty() {
            // A referenced cell's "empty formula" condition reads as an
            // invalid cell from the referencing formula's point of view.
            self.record(EvalError::InvalidCell);
            return 0.0;
        }

        snapshot.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AddOp {
    Add,
    Sub,
}

impl AddOp {
    fn classify(token: &Token) -> Option<Self> {
        match token.as_str() {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MulOp {
    Mul,
    Div,
}

impl MulOp {
    fn classify(token: &Token) -> Option<Self> {
        match token.as_str() {
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_model::tokens;
    use pretty_assertions::assert_eq;

    #[test]
    fn successful_parse_consumes_every_token() {
        let sheet = Sheet::new();
        let formula = tokens(["(", "2", "+", "3", ")", "*", "4"]);
        let mut cursor = Cursor {
            resolver: &sheet,
            tokens: &formula,
            pos: 0,
            error: None,
        };

        assert_eq!(cursor.expression(), 20.0);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.error, None);
    }

    #[test]
    fn divide_by_zero_short_circuits_only_its_term() {
        let sheet = Sheet::new();
        let formula = tokens(["5", "/", "0", "*", "2"]);
        let mut cursor = Cursor {
            resolver: &sheet,
            tokens: &formula,
            pos: 0,
            error: None,
        };

        // The term bails before consuming the trailing `* 2`.
        assert_eq!(cursor.expression(), f64::INFINITY);
        assert_eq!(cursor.pos, 3);
        assert_eq!(cursor.error, Some(EvalError::DivideByZero));
    }

    #[test]
    fn later_error_overwrites_earlier_message() {
        let sheet = Sheet::new();
        let mut evaluator = Evaluator::new(&sheet);

        // The inner `2 +` runs out of tokens (partial formula), then the
        // unclosed `(` records missing parentheses over it.
        evaluator.evaluate(&tokens(["(", "2", "+"]));
        assert_eq!(
            evaluator.error_kind(),
            Some(&EvalError::MissingParentheses)
        );
    }

    #[test]
    fn infinity_keeps_folding_into_the_outer_expression() {
        let sheet = Sheet::new();
        let mut evaluator = Evaluator::new(&sheet);

        evaluator.evaluate(&tokens(["1", "+", "5", "/", "0", "-", "2"]));
        assert_eq!(evaluator.error_kind(), Some(&EvalError::DivideByZero));
        assert_eq!(evaluator.result(), f64::INFINITY);
    }

    #[test]
    fn reset_clears_previous_state() {
        let sheet = Sheet::new();
        let mut evaluator = Evaluator::new(&sheet);

        evaluator.evaluate(&tokens(["bogus"]));
        assert_eq!(evaluator.error_kind(), Some(&EvalError::InvalidFormula));

        evaluator.reset();
        assert_eq!(evaluator.error(), "");
        assert_eq!(evaluator.result(), 0.0);
    }
}
