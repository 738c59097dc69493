//! Calculator core: turns single-character input into tokens and folds them
//! left to right.
//!
//! ## Module Structure
//!
//! - **operator.rs**: operator set, symbols and arithmetic
//! - **token.rs**: number/operator tokens
//! - **builder.rs**: token sequence, pending fragment and display text
//! - **evaluator.rs**: left-to-right fold
//! - **format.rs**: number formatting for display
//! - **session.rs**: per-character dispatch, the entry point for a UI

pub mod builder;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod operator;
pub mod session;
pub mod token;

pub use builder::{ExpressionBuilder, FragmentKind};
pub use error::CalcError;
pub use evaluator::{evaluate_current, evaluate_final};
pub use format::format_number;
pub use operator::Operator;
pub use session::{Key, Readout, Session};
pub use token::Token;
