//! Operator registry: the closed set of operators and their symbols.

use super::error::CalcError;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Math operators understood by the evaluator.
///
/// `None` is a placeholder with no symbol. It must never reach a finished
/// token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Percentage,
    None,
}

lazy_static! {
    /// Input characters accepted for each operator, including the ASCII
    /// forms a keyboard produces.
    static ref SYMBOL_TABLE: HashMap<char, Operator> = {
        let mut table = HashMap::new();
        table.insert('+', Operator::Plus);
        table.insert('-', Operator::Minus);
        table.insert('×', Operator::Multiply);
        table.insert('*', Operator::Multiply);
        table.insert('x', Operator::Multiply);
        table.insert('÷', Operator::Divide);
        table.insert('/', Operator::Divide);
        table.insert('%', Operator::Percentage);
        table
    };
}

impl Operator {
    /// Display symbol, `None` for the placeholder operator.
    pub fn symbol(self) -> Option<char> {
        match self {
            Operator::Plus => Some('+'),
            Operator::Minus => Some('-'),
            Operator::Multiply => Some('×'),
            Operator::Divide => Some('÷'),
            Operator::Percentage => Some('%'),
            Operator::None => None,
        }
    }

    /// Look up the operator for an input or display character.
    pub fn from_symbol(symbol: char) -> Result<Operator, CalcError> {
        SYMBOL_TABLE
            .get(&symbol)
            .copied()
            .ok_or(CalcError::UnknownOperator(symbol))
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by zero is not an error: the IEEE result (infinity or NaN)
    /// is returned as is.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Plus => Ok(lhs + rhs),
            Operator::Minus => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => Ok(lhs / rhs),
            Operator::Percentage => Ok((lhs / rhs) * 100.0),
            Operator::None => Err(CalcError::InvalidOperator),
        }
    }
}

/// True if `c` is a display symbol of some operator.
pub fn is_operator_symbol(c: char) -> bool {
    SYMBOL_TABLE.get(&c).is_some_and(|op| op.symbol() == Some(c))
}
