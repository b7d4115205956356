//! Error types for content compilation.

use thiserror::Error;

/// Errors that can occur while compiling a single content file.
///
/// Every error aborts the current file's compilation. Failure isolation is
/// per file: the scheduler reports the error once and keeps compiling
/// unrelated files.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The text encoding of a descriptor could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
    /// The transformed descriptor could not be serialized to binary.
    #[error("encode error: {0}")]
    Encode(String),
    /// A required descriptor field was absent.
    #[error("message is missing required field: {field}")]
    MissingField { field: &'static str },
    /// Referential integrity failure, e.g. an undeclared GUI texture name.
    #[error("{0}")]
    Validation(String),
    /// A referenced sibling file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
