use thiserror::Error;

/// Errors raised by the calculator core.
///
/// Only `UnknownOperator` is reachable from user input. The other variants
/// mean the session fed the builder or evaluator something it should never
/// produce.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(char),

    #[error("Cannot commit an empty fragment")]
    MalformedFragment,

    #[error("Operator has no arithmetic meaning")]
    InvalidOperator,

    #[error("Token at index {index} breaks number/operator alternation")]
    UnexpectedToken { index: usize },
}

impl CalcError {
    /// True for errors that indicate a bug in the calculator itself rather
    /// than bad input.
    pub fn is_defect(&self) -> bool {
        !matches!(self, CalcError::UnknownOperator(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operator_is_not_a_defect() {
        assert!(!CalcError::UnknownOperator('a').is_defect());
    }

    #[test]
    fn test_internal_errors_are_defects() {
        assert!(CalcError::MalformedFragment.is_defect());
        assert!(CalcError::InvalidOperator.is_defect());
        assert!(CalcError::UnexpectedToken { index: 2 }.is_defect());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::UnknownOperator('a').to_string(),
            "Unknown operator: 'a'"
        );
        assert_eq!(
            CalcError::UnexpectedToken { index: 3 }.to_string(),
            "Token at index 3 breaks number/operator alternation"
        );
    }
}
