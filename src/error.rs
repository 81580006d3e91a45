//! Error taxonomy for analysis runs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntropyError {
    /// Window size / stride / canvas parameters rejected before any I/O.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A contract violation by the caller, e.g. advancing a window past EOF.
    #[error("Illegal state: {0}")]
    IllegalState(&'static str),

    #[error("I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),

    /// Cooperative cancellation observed while reading the source.
    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),
}

impl EntropyError {
    /// Whether this error is a cancellation rather than a failure worth reporting.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, EntropyError>;
