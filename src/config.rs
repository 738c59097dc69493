// Configuration for the tallykey front end
// Defaults are what the binary uses when no flag overrides them

use std::path::PathBuf;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Keys that drive the app rather than the calculator
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    /// Leave the app (default 'q'; Ctrl-C always works)
    pub quit: char,

    /// Clear the expression (default 'c'; Esc always works)
    pub clear: char,

    /// Copy the current text to the clipboard (default 'y')
    pub copy: char,

    /// Backspace in scripts and terminals without a backspace key (default '<')
    pub undo: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: 'q',
            clear: 'c',
            copy: 'y',
            undo: '<',
        }
    }
}

/// What the terminal front end shows besides the expression
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Show the running subtotal under the expression (default true)
    pub show_subtotal: bool,

    /// Show the key help line at the bottom (default true)
    pub show_key_help: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_subtotal: true,
            show_key_help: true,
        }
    }
}

/// Logging destination and filter
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogConfig {
    /// Explicit filter directive; falls back to RUST_LOG, then DEFAULT_LOG_FILTER
    pub level: Option<String>,

    /// Log file. The terminal UI owns stdout, so without a file nothing is
    /// logged in interactive mode
    pub file: Option<PathBuf>,
}

/// Master configuration combining all tallykey settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub keys: KeyBindings,
    pub display: DisplayConfig,
    pub log: LogConfig,
}
