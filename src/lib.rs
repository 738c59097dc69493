pub mod app;
pub mod calc;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use calc::{CalcError, Session};
