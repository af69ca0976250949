//! Error types for mznfmt

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for mznfmt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mznfmt
///
/// Printing has no recoverable failure modes of its own; the only errors a
/// caller can observe are I/O errors from the output sink, passed through
/// unchanged.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    #[diagnostic(code(mznfmt::io_error))]
    IoError(#[from] std::io::Error),
}
