//! Error types for text extraction.
//!
//! Malformed RTF never produces an error: the tokenizer resynchronizes and
//! the extraction engine yields a best-effort result. Only output sinks
//! (files, writers) can fail.

use thiserror::Error;

/// Main error type for extraction operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading a source file or writing a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
