use super::format::format_number;
use super::operator::Operator;

/// A committed unit of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A number, with the fragment text it was committed from.
    Number { value: f64, literal: String },
    Operator(Operator),
}

impl Token {
    /// Build a number token whose literal is the formatted value.
    pub fn number(value: f64) -> Self {
        Token::Number {
            value,
            literal: format_number(value),
        }
    }

    pub fn operator(op: Operator) -> Self {
        Token::Operator(op)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number { value, .. } => Some(*value),
            Token::Operator(_) => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Number { .. } => None,
            Token::Operator(op) => Some(*op),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number { .. })
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// Text this token contributes to the display.
    pub fn display_text(&self) -> String {
        match self {
            Token::Number { literal, .. } => literal.clone(),
            Token::Operator(op) => op.symbol().map(String::from).unwrap_or_default(),
        }
    }
}
