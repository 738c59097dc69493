//! Left-to-right evaluation of token sequences.
//!
//! There is no precedence and no grouping: `[3, +, 4, ×, 2]` is `(3 + 4) × 2`.

use super::error::CalcError;
use super::token::Token;
use tracing::trace;

/// Evaluate a finished expression.
///
/// A trailing operator is ignored. An empty sequence evaluates to zero.
pub fn evaluate_final(tokens: &[Token]) -> Result<f64, CalcError> {
    if tokens.is_empty() {
        trace!("No tokens, returning zero");
        return Ok(0.0);
    }

    fold(tokens)
}

/// Evaluate an expression that is still being typed.
///
/// With one number and at most one trailing operator the number is returned
/// without folding.
pub fn evaluate_current(tokens: &[Token]) -> Result<f64, CalcError> {
    match tokens {
        [] => Ok(0.0),
        [first] | [first, _] => leading_number(first),
        _ => fold(tokens),
    }
}

fn leading_number(token: &Token) -> Result<f64, CalcError> {
    token
        .as_number()
        .ok_or(CalcError::UnexpectedToken { index: 0 })
}

fn fold(tokens: &[Token]) -> Result<f64, CalcError> {
    let mut acc = leading_number(&tokens[0])?;

    for (pair_index, pair) in tokens[1..].chunks(2).enumerate() {
        let index = 1 + pair_index * 2;
        let op = pair[0]
            .as_operator()
            .ok_or(CalcError::UnexpectedToken { index })?;

        // Trailing operator with no right-hand side.
        let Some(rhs) = pair.get(1) else {
            break;
        };
        let rhs = rhs
            .as_number()
            .ok_or(CalcError::UnexpectedToken { index: index + 1 })?;

        acc = op.apply(acc, rhs)?;
        trace!(?op, rhs, acc, "Folded pair");
    }

    Ok(acc)
}
