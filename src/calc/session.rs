//! Session controller: classifies each input character and drives the
//! expression builder.

use super::builder::{ExpressionBuilder, FragmentKind, EMPTY_DISPLAY};
use super::error::CalcError;
use super::evaluator::{evaluate_current, evaluate_final};
use super::format::format_number;
use super::operator::Operator;
use tracing::{debug, error, info};

/// A classified input character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
}

impl Key {
    pub fn from_char(c: char) -> Result<Key, CalcError> {
        match c {
            '0'..='9' => Ok(Key::Digit(c)),
            '.' => Ok(Key::Decimal),
            '=' => Ok(Key::Equals),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }
}

/// The two strings a calculator surface shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub main_text: String,
    pub subtotal_text: String,
}

/// One editing session: a builder plus the derived subtotal.
#[derive(Debug, Clone, Default)]
pub struct Session {
    builder: ExpressionBuilder,
    subtotal: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_text(&self) -> &str {
        self.builder.display()
    }

    /// Running total of the committed tokens, empty when there are none.
    pub fn subtotal_text(&self) -> &str {
        &self.subtotal
    }

    pub fn readout(&self) -> Readout {
        Readout {
            main_text: self.main_text().to_string(),
            subtotal_text: self.subtotal.clone(),
        }
    }

    pub fn builder(&self) -> &ExpressionBuilder {
        &self.builder
    }

    /// Feed one character from the input surface.
    ///
    /// Characters that are not digits, `.`, `=` or a known operator are
    /// rejected with `UnknownOperator` and change nothing. Inputs that make
    /// no sense in the current position are ignored silently.
    pub fn ingest(&mut self, c: char) -> Result<(), CalcError> {
        let key = Key::from_char(c).inspect_err(|e| debug!(%e, "Ignoring input"))?;

        let mut continuing = false;
        if self.builder.is_evaluated() {
            // A sentinel such as "NaN" cannot be an operand, so only a finite
            // result carries over into the next expression.
            let finite = self.builder.pending_value().is_some_and(f64::is_finite);
            if matches!(key, Key::Digit(_)) || !finite {
                self.builder.reset();
            } else {
                continuing = true;
            }
            self.builder.set_evaluated(false);
        }

        let result = if self.builder.display() == EMPTY_DISPLAY && !continuing {
            self.begin(key);
            Ok(())
        } else {
            self.dispatch(key)
        };

        debug!(
            ?key,
            pending = self.builder.pending(),
            display = self.builder.display(),
            "Processed input"
        );

        if let Err(e) = result {
            report_defect(&e);
            self.refresh_subtotal();
            return Err(e);
        }

        self.refresh_subtotal();
        Ok(())
    }

    /// Feed every character of `keys`, skipping rejected ones.
    pub fn ingest_str(&mut self, keys: &str) {
        for c in keys.chars() {
            let _ = self.ingest(c);
        }
    }

    /// Backspace.
    pub fn undo(&mut self) {
        let sentinel = self.builder.is_evaluated()
            && !self.builder.pending_value().is_some_and(f64::is_finite);
        if sentinel {
            self.builder.reset();
        } else {
            self.builder.undo_last_character();
            self.builder.set_evaluated(false);
        }
        self.refresh_subtotal();
    }

    /// Clear everything.
    pub fn reset(&mut self) {
        self.builder.reset();
        self.refresh_subtotal();
    }

    /// First input on an empty display: only the start of a number counts.
    fn begin(&mut self, key: Key) {
        let text = match key {
            Key::Digit(d) => d.to_string(),
            Key::Operator(Operator::Minus) => "-".to_string(),
            Key::Decimal => "0.".to_string(),
            Key::Operator(_) | Key::Equals => {
                debug!(?key, "Ignoring input on empty display");
                return;
            }
        };
        self.builder.reset();
        self.builder.append_to_pending(&text);
    }

    fn dispatch(&mut self, key: Key) -> Result<(), CalcError> {
        let kind = self.builder.fragment_kind();
        match key {
            Key::Equals => self.equals(kind),
            Key::Digit(d) => self.digit(kind, d),
            Key::Decimal => self.decimal(kind),
            Key::Operator(Operator::Minus) => self.minus(kind),
            Key::Operator(op) => self.operator(kind, op),
        }
    }

    fn equals(&mut self, kind: FragmentKind) -> Result<(), CalcError> {
        match kind {
            FragmentKind::Empty => {}
            // A sign with no digits after it has nothing to contribute.
            FragmentKind::Sign => self.builder.replace_pending(""),
            FragmentKind::Number | FragmentKind::Operator(_) => {
                self.builder.commit_pending("", false)?
            }
        }

        let total = evaluate_final(self.builder.tokens())?;
        let text = format_number(total);
        info!(result = %text, "Evaluated expression");
        self.builder.load_result(&text);
        Ok(())
    }

    fn digit(&mut self, kind: FragmentKind, digit: char) -> Result<(), CalcError> {
        let mut buf = [0; 4];
        let text = digit.encode_utf8(&mut buf);
        match kind {
            FragmentKind::Empty | FragmentKind::Number | FragmentKind::Sign => {
                self.builder.append_to_pending(text);
                Ok(())
            }
            FragmentKind::Operator(_) => self.builder.commit_pending(text, false),
        }
    }

    fn decimal(&mut self, kind: FragmentKind) -> Result<(), CalcError> {
        match kind {
            FragmentKind::Number if self.builder.pending().contains('.') => {
                debug!("Fragment already has a decimal point");
                Ok(())
            }
            FragmentKind::Number => {
                self.builder.append_to_pending(".");
                Ok(())
            }
            FragmentKind::Empty | FragmentKind::Sign => {
                self.builder.append_to_pending("0.");
                Ok(())
            }
            FragmentKind::Operator(_) => self.builder.commit_pending("0.", false),
        }
    }

    /// Minus is both subtraction and the sign of the next number.
    fn minus(&mut self, kind: FragmentKind) -> Result<(), CalcError> {
        match kind {
            // Subtraction.
            FragmentKind::Number => self.builder.commit_pending("-", false),
            // `5+` then `-`: the user changed their mind about the operator.
            FragmentKind::Operator(Operator::Plus) => {
                self.builder.replace_pending("-");
                Ok(())
            }
            // `5×` then `-`: a negative right-hand operand.
            FragmentKind::Operator(_) => self.builder.commit_pending("-", false),
            FragmentKind::Sign | FragmentKind::Empty => {
                debug!("Ignoring minus after a sign");
                Ok(())
            }
        }
    }

    fn operator(&mut self, kind: FragmentKind, op: Operator) -> Result<(), CalcError> {
        let Some(symbol) = op.symbol() else {
            return Err(CalcError::InvalidOperator);
        };
        let mut buf = [0; 4];
        let symbol = symbol.encode_utf8(&mut buf);

        match kind {
            FragmentKind::Number => self.builder.commit_pending(symbol, false),
            FragmentKind::Operator(_) => {
                self.builder.replace_pending(symbol);
                Ok(())
            }
            FragmentKind::Sign | FragmentKind::Empty => {
                debug!(?op, "Ignoring operator without a left operand");
                Ok(())
            }
        }
    }

    fn refresh_subtotal(&mut self) {
        let tokens = self.builder.tokens();
        if tokens.is_empty() {
            self.subtotal.clear();
            return;
        }

        match evaluate_current(tokens) {
            Ok(value) => self.subtotal = format_number(value),
            Err(e) => {
                report_defect(&e);
                self.subtotal.clear();
            }
        }
    }
}

/// Internal errors are bugs: fatal in debug builds, logged in release.
fn report_defect(e: &CalcError) {
    error!(error = %e, "Calculator defect");
    debug_assert!(!e.is_defect(), "calculator defect: {e}");
}
