//! Error types for target validation and compilation

use thiserror::Error;

/// Errors raised for malformed targets and ranges
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectError {
    /// Range start lies after its end
    #[error("invalid residue range: beg {beg} > end {end}")]
    InvalidRange { beg: i32, end: i32 },

    /// Range spans more residues than any chain can hold
    #[error("residue range {beg}..={end} is too large")]
    RangeTooLarge { beg: i32, end: i32 },

    /// A range was given without a chain
    #[error("range requires a non-empty labelAsymId")]
    MissingChain,

    /// A selection document could not be interpreted
    #[error("malformed selection: {0}")]
    Malformed(String),
}

/// Result type for selection operations
pub type SelectResult<T> = Result<T, SelectError>;
