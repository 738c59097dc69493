use thiserror::Error;

/// Errors from the parts of the app around the calculator core.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
