//! Expression builder: committed tokens plus the fragment still being typed.

use super::error::CalcError;
use super::operator::{is_operator_symbol, Operator};
use super::token::Token;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Display text of an empty expression.
pub const EMPTY_DISPLAY: &str = "0";

/// What the pending fragment currently holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentKind {
    /// Nothing typed since the last commit.
    Empty,
    /// A numeral, possibly signed and possibly ending in `.`.
    Number,
    /// A lone `-` that starts a negative number.
    Sign,
    /// A single operator waiting for its right-hand operand.
    Operator(Operator),
}

/// Owns the token sequence, the pending fragment and the display text.
///
/// The display always equals the committed tokens' text followed by the
/// pending fragment, except in the empty state where it reads `"0"`.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    tokens: Vec<Token>,
    pending: String,
    display: String,
    evaluated: bool,
}

impl Default for ExpressionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            pending: String::new(),
            display: EMPTY_DISPLAY.to_string(),
            evaluated: false,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    pub fn set_evaluated(&mut self, evaluated: bool) {
        self.evaluated = evaluated;
    }

    /// Numeric value of the pending fragment, if it parses as one.
    pub fn pending_value(&self) -> Option<f64> {
        self.pending.parse().ok()
    }

    /// True when nothing has been typed since the last reset.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty() && self.pending.is_empty() && self.display == EMPTY_DISPLAY
    }

    pub fn reset(&mut self) {
        debug!("Resetting expression");
        self.tokens.clear();
        self.pending.clear();
        self.display = EMPTY_DISPLAY.to_string();
        self.evaluated = false;
    }

    pub fn fragment_kind(&self) -> FragmentKind {
        let mut chars = self.pending.chars();
        match (chars.next(), chars.next()) {
            (None, _) => FragmentKind::Empty,
            (Some('-'), None) => {
                if self.tokens.last().is_some_and(Token::is_number) {
                    FragmentKind::Operator(Operator::Minus)
                } else {
                    FragmentKind::Sign
                }
            }
            (Some(c), None) if is_operator_symbol(c) => match Operator::from_symbol(c) {
                Ok(op) => FragmentKind::Operator(op),
                Err(_) => FragmentKind::Number,
            },
            _ => FragmentKind::Number,
        }
    }

    /// Extend the pending fragment.
    pub fn append_to_pending(&mut self, text: &str) {
        if self.is_blank() {
            self.display = text.to_string();
        } else {
            self.display.push_str(text);
        }
        self.pending.push_str(text);
    }

    /// Turn the pending fragment into a token and start `next` as the new
    /// fragment.
    ///
    /// The fragment is read as a number first and as an operator symbol
    /// otherwise. With `replace_last` the previous token is popped before the
    /// new one is pushed.
    pub fn commit_pending(&mut self, next: &str, replace_last: bool) -> Result<(), CalcError> {
        let token = self.parse_pending()?;

        if replace_last {
            if let Some(stale) = self.pop_last_token() {
                debug!(?stale, "Replacing last token");
            }
        }

        debug!(?token, next, "Committing fragment");
        self.tokens.push(token);
        self.pending = next.to_string();
        self.display.push_str(next);
        Ok(())
    }

    fn parse_pending(&self) -> Result<Token, CalcError> {
        if self.pending.is_empty() {
            return Err(CalcError::MalformedFragment);
        }

        if let Ok(value) = self.pending.parse::<f64>() {
            return Ok(Token::Number {
                value,
                literal: self.pending.clone(),
            });
        }

        // Not a numeral, so it has to be a single operator symbol.
        let mut chars = self.pending.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c).map(Token::Operator),
            _ => Err(CalcError::MalformedFragment),
        }
    }

    /// Overwrite the pending fragment, leaving the tokens alone.
    pub fn replace_pending(&mut self, text: &str) {
        let kept = self.display.len() - self.pending.len();
        self.display.truncate(kept);
        self.display.push_str(text);
        if self.display.is_empty() {
            self.display = EMPTY_DISPLAY.to_string();
        }
        self.pending = text.to_string();
    }

    /// Remove the most recent token and its text. No-op when there are no
    /// tokens.
    pub fn pop_last_token(&mut self) -> Option<Token> {
        let token = self.tokens.pop()?;
        let text = token.display_text();
        let end = self.display.len() - self.pending.len();
        let start = end.saturating_sub(text.len());
        if self.display.get(start..end) == Some(text.as_str()) {
            self.display.replace_range(start..end, "");
        } else {
            warn!(display = %self.display, text, "Display out of sync with popped token");
        }
        if self.display.is_empty() {
            self.display = EMPTY_DISPLAY.to_string();
        }
        Some(token)
    }

    /// Replace everything with an evaluated result.
    pub fn load_result(&mut self, text: &str) {
        self.reset();
        self.pending = text.to_string();
        self.display = text.to_string();
        self.evaluated = true;
    }

    /// Backspace: drop the last displayed character.
    ///
    /// When the fragment runs out, the last token becomes the fragment again
    /// so the next backspace keeps eating into it.
    pub fn undo_last_character(&mut self) {
        if self.display == EMPTY_DISPLAY {
            debug!("At beginning, nothing to undo");
            return;
        }

        let Some((offset, last)) = self.display.grapheme_indices(true).next_back() else {
            self.reset();
            return;
        };
        let last = last.to_string();
        self.display.truncate(offset);

        if self.display.is_empty() {
            self.reset();
            return;
        }

        match self.pending.strip_suffix(last.as_str()) {
            Some(rest) => self.pending = rest.to_string(),
            None => {
                warn!(pending = %self.pending, last, "Pending fragment out of sync with display");
                self.pending.clear();
            }
        }

        if self.pending.is_empty() {
            if let Some(token) = self.tokens.pop() {
                self.pending = token.display_text();
                debug!(pending = %self.pending, "Restored fragment from last token");
            }
        }
    }
}
